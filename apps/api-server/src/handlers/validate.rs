//! Link pre-check for the submit form.

use actix_web::{HttpResponse, web};

use gramdrop_core::validation::{ValidationCode, validate_instagram_url};
use gramdrop_shared::dto::{ValidateQuery, ValidationResponse};

/// GET /api/validate?url=...
///
/// Always 200; the verdict is in the body.
pub async fn validate_link(query: web::Query<ValidateQuery>) -> HttpResponse {
    let response = match validate_instagram_url(&query.url) {
        Ok(_) => ValidationResponse {
            kind: "success".to_string(),
            code: ValidationCode::Ok.as_str().to_string(),
            message: ValidationCode::Ok.message().to_string(),
        },
        Err(e) => ValidationResponse {
            kind: "error".to_string(),
            code: e.code.as_str().to_string(),
            message: e.to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

//! HTTP handlers and route configuration.

mod health;
mod posts;
mod validate;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request(err.to_string(), "invalid-body").into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/validate", web::get().to(validate::validate_link))
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::patch().to(posts::update_post)),
            ),
    );
}

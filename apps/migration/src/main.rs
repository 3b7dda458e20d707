//! Schema tool for the post store.
//!
//! `migration [up|down|status|fresh]`, `up` when no command is given. The
//! database is resolved the same way the server resolves it: `DATABASE_URL`,
//! else `<DATA_DIR>/app.db` (`DATA_DIR` defaults to `data`).

use std::env;
use std::path::PathBuf;

use migration::Migrator;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Database;

fn database_url() -> Result<String, DbErr> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        DbErr::Custom(format!("cannot create data dir {}: {e}", data_dir.display()))
    })?;

    Ok(format!("sqlite://{}?mode=rwc", data_dir.join("app.db").display()))
}

#[tokio::main]
async fn main() -> Result<(), DbErr> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    let command = env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let url = database_url()?;
    let db = Database::connect(&url).await?;

    match command.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, Some(1)).await?,
        "status" => Migrator::status(&db).await?,
        "fresh" => Migrator::fresh(&db).await?,
        other => {
            return Err(DbErr::Custom(format!(
                "unknown command `{other}`, expected up, down, status or fresh"
            )));
        }
    }

    tracing::info!(command = %command, url = %url, "Migration command finished");
    db.close().await
}

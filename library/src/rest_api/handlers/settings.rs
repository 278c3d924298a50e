use actix_web::{error, web, Error, HttpResponse};
use serde_json::json;

use crate::db::{actions, model::SettingsInput, DbPool};

pub async fn get_settings(pool: web::Data<DbPool>) -> Result<HttpResponse, Error> {
    let conn = pool.get().map_err(error::ErrorInternalServerError)?;
    let settings = web::block(move || actions::get_settings(&conn))
        .await
        .map_err(|e| {
            log::error!("failed to load settings: {}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    match settings {
        Some(s) => Ok(HttpResponse::Ok().json(s)),
        None => Ok(HttpResponse::NotFound().json(json!({ "detail": "No settings found" }))),
    }
}

pub async fn post_settings(
    pool: web::Data<DbPool>,
    input: web::Json<SettingsInput>,
) -> Result<HttpResponse, Error> {
    let conn = pool.get().map_err(error::ErrorInternalServerError)?;
    let settings = web::block(move || actions::upsert_settings(&conn, input.into_inner()))
        .await
        .map_err(|e| {
            log::error!("failed to store settings: {}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    Ok(HttpResponse::Ok().json(settings))
}

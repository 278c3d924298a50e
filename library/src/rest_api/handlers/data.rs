use actix_web::{error, web, Error, HttpResponse};

use crate::db::{actions, model::NewReading, DbPool};

pub async fn get_data(pool: web::Data<DbPool>) -> Result<HttpResponse, Error> {
    let conn = pool.get().map_err(error::ErrorInternalServerError)?;
    let readings = web::block(move || actions::list_recent_readings(&conn))
        .await
        .map_err(|e| {
            log::error!("failed to load readings: {}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    Ok(HttpResponse::Ok().json(readings))
}

pub async fn post_data(
    pool: web::Data<DbPool>,
    new: web::Json<NewReading>,
) -> Result<HttpResponse, Error> {
    let conn = pool.get().map_err(error::ErrorInternalServerError)?;
    let reading = web::block(move || actions::insert_reading(&conn, new.into_inner()))
        .await
        .map_err(|e| {
            log::error!("failed to insert reading: {}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    Ok(HttpResponse::Created().json(reading))
}

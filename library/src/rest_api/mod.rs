use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

pub mod handlers;
use handlers::{data, login, settings};

pub fn rest_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .service(web::resource("/login").route(web::get().to(login::login)))
        .service(
            web::resource("/data")
                .route(web::get().to(data::get_data))
                .route(web::post().to(data::post_data)),
        )
        .service(
            web::resource("/settings")
                .route(web::get().to(settings::get_settings))
                .route(web::post().to(settings::post_settings)),
        );
}

/// Bodies that fail to deserialize are rejected with 422 before any
/// handler or database code runs.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let detail = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}

/// Landing/liveness message. Also the target of the keep-alive pinger.
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Water meter API is running" }))
}

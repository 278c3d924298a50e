use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::auth::CredentialCheck;

#[derive(Deserialize, Debug)]
pub struct LoginQuery {
    pub username: String,
    pub password: String,
}

pub async fn login(
    web::Query(query): web::Query<LoginQuery>,
    credentials: web::Data<dyn CredentialCheck>,
) -> HttpResponse {
    if credentials.validate(&query.username, &query.password) {
        HttpResponse::Ok().json(json!({ "message": "Success" }))
    } else {
        HttpResponse::Unauthorized().json(json!({ "detail": "Invalid credentials" }))
    }
}

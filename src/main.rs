use actix_files as fs;
use actix_web::{middleware, rt, web, App, HttpServer};
use std::path::Path;
use std::sync::Arc;

use library::auth::{CredentialCheck, StaticCredentials};
use library::{db, keep_alive, rest_api, PING_INTERVAL};

/// Prebuilt dashboard bundle, served when present.
const FRONTEND_DIR: &str = "frontend/dist";
const DEFAULT_PORT: u16 = 10000;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var(
            "RUST_LOG",
            "actix_server=info,actix_web=info,library=info,water_meter_server=info",
        );
    }
    env_logger::init();
    dotenv::dotenv().ok();

    // set up database connection pool; missing DATABASE_URL aborts startup
    let connspec = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let pool = db::init_pool(&connspec);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // ping our own public URL so the host doesn't idle the process
    let public_url = std::env::var("PUBLIC_URL")
        .unwrap_or_else(|_| format!("http://127.0.0.1:{}/", port));
    rt::spawn(keep_alive::run(public_url, PING_INTERVAL));

    let credentials: Arc<dyn CredentialCheck> = Arc::new(StaticCredentials::default());

    let serve_frontend = Path::new(FRONTEND_DIR).is_dir();
    if !serve_frontend {
        log::warn!(
            "frontend bundle not found at {}/, serving API only",
            FRONTEND_DIR
        );
    }

    log::info!("starting water meter server on 0.0.0.0:{}", port);
    HttpServer::new(move || {
        let app = App::new()
            .wrap(middleware::Logger::default())
            .data(pool.clone())
            .app_data(web::Data::from(credentials.clone()))
            .app_data(rest_api::json_config())
            .configure(rest_api::rest_config);
        // API routes above take precedence over the bundle
        if serve_frontend {
            app.service(fs::Files::new("/", FRONTEND_DIR).index_file("index.html"))
        } else {
            app
        }
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

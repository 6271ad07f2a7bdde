#[macro_use]
extern crate diesel;

use actix_cors::{Cors, CorsFactory};
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::env;

pub mod db;
pub mod extractors;
pub mod models;
pub mod routes;
pub mod schema;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8088";
const DEFAULT_PAYLOAD_LIMIT: usize = 262_144;

pub async fn run() -> std::io::Result<()> {
    std::env::set_var("RUST_LOG", "newsdesk=debug,actix_web=info");
    std::env::set_var("RUST_BACKTRACE", "1");
    env_logger::init();
    let pool = db::create_connection_pool();
    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned());
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors())
            .data(pool.clone())
            .app_data(web::JsonConfig::default().limit(payload_limit()))
            .service(routes::index)
            .service(routes::suggestions::create_suggestion)
            .service(routes::suggestions::list_suggestions)
            .service(routes::moderation::moderate_suggestion)
            .service(routes::articles::list_approved)
    })
    .bind(bind_address)?
    .run()
    .await
}

fn build_cors() -> CorsFactory {
    let cors = Cors::new()
        .allowed_methods(vec!["GET", "POST", "OPTIONS", "PUT", "DELETE"])
        .allowed_header(actix_web::http::header::CONTENT_TYPE)
        .max_age(3600);
    // The front-end is served from a separate host. Without ALLOWED_ORIGIN
    // the wildcard policy applies.
    match env::var("ALLOWED_ORIGIN") {
        Ok(origin) => cors.allowed_origin(&origin).finish(),
        Err(_) => cors.send_wildcard().finish(),
    }
}

fn payload_limit() -> usize {
    env::var("MAX_PAYLOAD_BYTES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PAYLOAD_LIMIT)
}

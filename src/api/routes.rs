// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/analysis", web::post().to(handlers::generator::analyze_password)),
    );

    // System routes
    cfg.route("/health", web::get().to(handlers::system::health));
}

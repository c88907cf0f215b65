// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::Config;
use crate::generators::PasswordGenerator;
use crate::models::ClassSelection;

pub mod handlers;
pub mod routes;
pub mod types;

/// Shared, read-only state for request handlers.
#[derive(Debug, Clone)]
pub struct ApiState {
    pub generator: PasswordGenerator,
    pub default_length: usize,
    pub default_classes: ClassSelection,
}

impl ApiState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            generator: PasswordGenerator::new(config.length_policy),
            default_length: config.default_length,
            default_classes: config.default_classes,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
        crate::api::handlers::system::health
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HealthResponse,
            crate::models::StrengthTier
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "System", description = "System status")
    ),
    info(
        title = "Password Generator API",
        version = "0.1.0",
        description = "Random password generation with strength rating"
    )
)]
pub struct ApiDoc;

pub async fn start_server(state: ApiState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting password generator API on {}:{}", address, port);

    let state = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

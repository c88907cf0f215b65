// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse, PasswordGenerationRequest,
    PasswordGenerationResponse,
};
use crate::api::ApiState;
use crate::generators::{analyze, classify};
use crate::models::GenerationRequest;

/// Generate a password
///
/// Generates a password from the requested length and character classes.
/// When no class is requested the server's default classes are used.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length or class selection", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<ApiState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let request = GenerationRequest::new(
        generation_req.length.unwrap_or(state.default_length),
        generation_req.selection(state.default_classes),
    );

    match state.generator.generate(&request) {
        Ok(password) => {
            let strength = classify(password.as_str());
            log::info!("Generated {} password of length {}", strength, password.len());
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                password: Some(password.into_string()),
                strength: Some(strength),
                error: None,
            })
        }
        Err(e) => {
            log::warn!("Rejected generation request: {}", e);
            HttpResponse::BadRequest().json(PasswordGenerationResponse {
                success: false,
                password: None,
                strength: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Analyze password strength
///
/// Rates a password against the five strength criteria and lists what is missing.
#[utoipa::path(
    post,
    path = "/generator/analysis",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(analysis_req: web::Json<PasswordAnalysisRequest>) -> impl Responder {
    let report = analyze(&analysis_req.password);

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: report.tier,
        score: report.score,
        feedback: report.feedback,
    })
}

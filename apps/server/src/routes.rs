//! HTTP routes: the process endpoint plus the health and information
//! endpoints.
//!
//! This layer only decodes envelopes and maps analyser failures to status
//! codes and `{code, description, title}` bodies; all analysis semantics
//! live in `tas-analysis`.

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::debug;

use tas_analysis::ContentAnalyser;
use tas_shared::{AnalysisRequest, AppConfig, TasError};

use crate::error_codes;

/// Process-wide state shared by all handlers.
pub struct AppState {
    pub analyser: ContentAnalyser,
    pub config: AppConfig,
}

/// API error body: `{code, description, title}`.
#[derive(Debug, Serialize)]
struct ApiError {
    code: u32,
    description: String,
    title: String,
}

impl ApiError {
    fn new(code: u32, description: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            title: title.into(),
        }
    }
}

/// Register all routes on an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v1/process", web::post().to(process))
        .route("/service/health", web::get().to(health))
        .route("/service/information", web::get().to(information));
}

/// `POST /api/v1/process` — analyse one page.
async fn process(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    if body.is_empty() {
        return HttpResponse::BadRequest().json(ApiError::new(
            error_codes::EMPTY_REQUEST_BODY,
            "The contents of a web page must be provided",
            "Empty request body",
        ));
    }

    let Ok(decoded) = serde_json::from_slice::<serde_json::Value>(&body) else {
        return HttpResponse::BadRequest().json(ApiError::new(
            error_codes::INVALID_REQUEST_BODY,
            "The contents of the request body could not be decoded",
            "Invalid request body",
        ));
    };

    let Ok(request) = serde_json::from_value::<AnalysisRequest>(decoded) else {
        return HttpResponse::BadRequest().json(ApiError::new(
            error_codes::INVALID_REQUEST_BODY,
            "The contents of the request are not in the appropriate format",
            "Invalid request body",
        ));
    };

    match state.analyser.process(&request) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => analyser_error_response(e),
    }
}

/// Map analyser failure kinds to API responses. Internal detail was
/// already logged at the analyser boundary and never reaches the client.
fn analyser_error_response(error: TasError) -> HttpResponse {
    debug!(error = %error, "analysis request rejected");

    match error {
        TasError::UnsupportedContentType { content_type } => {
            HttpResponse::BadRequest().json(ApiError::new(
                error_codes::INVALID_REQUEST_BODY,
                format!("The content type \"{content_type}\" is not supported"),
                "Invalid request body",
            ))
        }
        TasError::InvalidContent { .. } => HttpResponse::BadRequest().json(ApiError::new(
            error_codes::INVALID_HTML_CONTENT,
            "The html analysis request contained invalid data",
            "Invalid request body",
        )),
        _ => HttpResponse::NotFound().json(ApiError::new(
            error_codes::TAS_ERROR,
            "Failed to process content",
            "Processing error",
        )),
    }
}

/// `GET /service/health`.
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"result": "ok"}))
}

/// `GET /service/information` — pure reflection of configuration.
async fn information(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "host": state.config.server.host,
        "port": state.config.server.port,
        "service": state.config.service.name,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

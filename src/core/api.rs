//! HTTP API for Love Emergency
//!
//! Endpoints:
//! - POST /assess - Run one questionnaire submission
//! - GET /health - Health check

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{ChartData, ReportAssembler, ReportRecorder};
use crate::types::{AssessmentError, AssessmentInput, AssessmentRequest, Report};

/// App state
pub struct AppState {
    pub recorder: Arc<dyn ReportRecorder>,
    pub reports_generated: AtomicU64,
}

/// Assessment response
#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub report: Report,
    /// Bravery diagnostic on the simulated trajectory
    pub brave: bool,
    pub chart: ChartData,
}

/// Error body for rejected submissions
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub reports_generated: u64,
}

/// Create the API router
pub fn create_router(recorder: Arc<dyn ReportRecorder>) -> Router {
    let state = Arc::new(AppState {
        recorder,
        reports_generated: AtomicU64::new(0),
    });

    Router::new()
        .route("/health", get(health))
        .route("/assess", post(assess))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        reports_generated: state.reports_generated.load(Ordering::Relaxed),
    })
}

/// Run one assessment
async fn assess(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<AssessResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        let status = rejection.status();
        reject(status, AssessmentError::MalformedBody(rejection.body_text()))
    })?;

    let input = AssessmentInput::try_from(request)
        .map_err(|err| reject(StatusCode::UNPROCESSABLE_ENTITY, err))?;

    let mut assembler = ReportAssembler::from_entropy().with_recorder(state.recorder.clone());
    let report = assembler
        .assemble(&input)
        .map_err(|err| reject(StatusCode::UNPROCESSABLE_ENTITY, err))?;

    state.reports_generated.fetch_add(1, Ordering::Relaxed);

    let brave = report.trajectory().is_brave();
    let chart = ChartData::from_inputs(&report.render_inputs());
    Ok(Json(AssessResponse { report, brave, chart }))
}

/// Log a rejected submission and shape it as an error body
fn reject(status: StatusCode, err: AssessmentError) -> (StatusCode, Json<ErrorResponse>) {
    warn!(code = err.code(), error = %err, "assessment rejected");
    (
        status,
        Json(ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        }),
    )
}

/// Run the API server
pub async fn run_server(
    addr: &str,
    recorder: Arc<dyn ReportRecorder>,
) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(recorder);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API listening");
    println!("💌 Love Emergency API running on {}", addr);
    println!("  POST /assess  - Run an assessment");
    println!("  GET  /health  - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}

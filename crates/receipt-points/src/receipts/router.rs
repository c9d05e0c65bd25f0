use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{error, warn};

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::ReceiptRepository;
use super::service::{ReceiptScoringService, ReceiptServiceError};

/// Router builder exposing intake, scoring, and listing endpoints.
pub fn receipt_router<R>(service: Arc<ReceiptScoringService<R>>) -> Router
where
    R: ReceiptRepository + 'static,
{
    Router::new()
        .route("/receipts", get(list_handler::<R>))
        .route("/receipts/process", post(submit_handler::<R>))
        .route("/receipt/process", post(submit_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .route("/receipts/:id/points/steps", get(steps_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<ReceiptScoringService<R>>>,
    payload: Result<Json<ReceiptSubmission>, JsonRejection>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let message = rejection.body_text();
            warn!(error = %message, "malformed receipt payload");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    match service.submit(submission) {
        Ok(stored) => (StatusCode::OK, Json(json!({ "id": stored.id }))).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptScoringService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.score(&ReceiptId(id), false) {
        Ok(report) => (StatusCode::OK, Json(json!({ "points": report.points }))).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn steps_handler<R>(
    State(service): State<Arc<ReceiptScoringService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.score(&ReceiptId(id), true) {
        Ok(report) => {
            let breakdown = report.breakdown.unwrap_or_default();
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<ReceiptScoringService<R>>>,
) -> Response
where
    R: ReceiptRepository + 'static,
{
    match service.list() {
        Ok(receipts) => (StatusCode::OK, Json(receipts)).into_response(),
        Err(err) => service_error_response(err),
    }
}

fn service_error_response(err: ReceiptServiceError) -> Response {
    match err {
        ReceiptServiceError::Submission(error) => {
            error_response(StatusCode::BAD_REQUEST, error.to_string())
        }
        ReceiptServiceError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string()),
        ReceiptServiceError::Repository(source) => {
            error!(error = %source, "receipt repository failure");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

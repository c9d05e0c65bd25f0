use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::error::AppError;
use receipt_points::receipts::{
    InMemoryReceiptRepository, ReceiptScoringService, ReceiptSubmission,
};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ReceiptService = ReceiptScoringService<InMemoryReceiptRepository>;

/// Fresh scoring service over an empty in-memory store.
pub(crate) fn receipt_service() -> Arc<ReceiptService> {
    let repository = Arc::new(InMemoryReceiptRepository::new());
    Arc::new(ReceiptScoringService::new(repository))
}

pub(crate) fn read_submission(path: &Path) -> Result<ReceiptSubmission, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let submission = serde_json::from_str(&raw)?;
    Ok(submission)
}

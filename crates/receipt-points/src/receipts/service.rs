use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{Receipt, ReceiptId, ReceiptSubmission, StoredReceipt, SubmissionError};
use super::repository::{ReceiptRepository, RepositoryError};
use super::scoring::{PointsEngine, ScoreBreakdown, ScoreOutcome};

/// Service composing intake validation, the receipt store, and the points engine.
pub struct ReceiptScoringService<R> {
    repository: Arc<R>,
    engine: PointsEngine,
}

/// Points awarded to a stored receipt, with the step-by-step trace when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub points: u64,
    pub breakdown: Option<ScoreBreakdown>,
}

impl<R> ReceiptScoringService<R>
where
    R: ReceiptRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: PointsEngine::new(),
        }
    }

    /// Validate and store a submission. Nothing is stored when any field is rejected.
    pub fn submit(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<StoredReceipt, ReceiptServiceError> {
        let receipt = Receipt::try_from(submission).inspect_err(|error| {
            warn!(%error, "receipt submission rejected");
        })?;

        let stored = self.repository.put(receipt)?;
        info!(
            receipt_id = %stored.id,
            retailer = %stored.receipt.retailer,
            items = stored.receipt.items.len(),
            "receipt stored"
        );
        Ok(stored)
    }

    /// Score a stored receipt, collecting the rationale only when `with_trace` is set.
    pub fn score(
        &self,
        id: &ReceiptId,
        with_trace: bool,
    ) -> Result<ScoreReport, ReceiptServiceError> {
        let stored = self.get(id)?;
        let outcome = self.engine.score(&stored.receipt);
        debug!(receipt_id = %id, points = outcome.points, with_trace, "receipt scored");

        let breakdown = with_trace.then(|| outcome.breakdown());
        Ok(ScoreReport {
            points: outcome.points,
            breakdown,
        })
    }

    /// Score a submission without storing it.
    pub fn evaluate(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ScoreOutcome, ReceiptServiceError> {
        let receipt = Receipt::try_from(submission)?;
        Ok(self.engine.score(&receipt))
    }

    pub fn get(&self, id: &ReceiptId) -> Result<StoredReceipt, ReceiptServiceError> {
        self.repository
            .get(id)?
            .ok_or_else(|| ReceiptServiceError::NotFound(id.clone()))
    }

    pub fn list(&self) -> Result<Vec<StoredReceipt>, ReceiptServiceError> {
        Ok(self.repository.list()?)
    }
}

/// Error raised by the receipt scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error("ID:'{0}' not found")]
    NotFound(ReceiptId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

//! Receipt intake, points scoring, and the in-memory receipt store.

pub mod domain;
pub mod money;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Item, ItemSubmission, Receipt, ReceiptId, ReceiptSubmission, StoredReceipt, SubmissionError,
};
pub use money::{MonetaryError, Money};
pub use repository::{InMemoryReceiptRepository, ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{PointsEngine, ScoreBreakdown, ScoreComponent, ScoreOutcome, ScoringRule};
pub use service::{ReceiptScoringService, ReceiptServiceError, ScoreReport};

use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{
    ItemSubmission, Receipt, ReceiptId, ReceiptSubmission, StoredReceipt,
};
use crate::receipts::repository::{
    InMemoryReceiptRepository, ReceiptRepository, RepositoryError,
};
use crate::receipts::{receipt_router, ReceiptScoringService};

pub(super) fn item(description: &str, price: &str) -> ItemSubmission {
    ItemSubmission {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

/// Target receipt worth 28 points.
pub(super) fn target_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

/// M&M Corner Market receipt worth 109 points.
pub(super) fn corner_market_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
    }
}

/// Single-item receipt that earns no points at all.
pub(super) fn plain_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "&".to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "09:15".to_string(),
        total: "1.26".to_string(),
        items: vec![item("Knorr Creamy Chicken", "1.26")],
    }
}

pub(super) fn receipt(submission: ReceiptSubmission) -> Receipt {
    Receipt::try_from(submission).expect("fixture receipt is valid")
}

pub(super) fn build_service() -> (
    ReceiptScoringService<InMemoryReceiptRepository>,
    Arc<InMemoryReceiptRepository>,
) {
    let repository = Arc::new(InMemoryReceiptRepository::new());
    let service = ReceiptScoringService::new(repository.clone());
    (service, repository)
}

pub(super) fn receipt_router_with_service(
    service: ReceiptScoringService<InMemoryReceiptRepository>,
) -> axum::Router {
    receipt_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Repository whose backing store is always down.
#[derive(Default)]
pub(super) struct UnavailableRepository;

impl ReceiptRepository for UnavailableRepository {
    fn put(&self, _receipt: Receipt) -> Result<StoredReceipt, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn get(&self, _id: &ReceiptId) -> Result<Option<StoredReceipt>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<StoredReceipt>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

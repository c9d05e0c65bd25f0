use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::{MonetaryError, Money};

/// Identifier wrapper for stored receipts. Always generated server-side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub(crate) fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receipt body exactly as posted by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<ItemSubmission>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemSubmission {
    pub short_description: String,
    pub price: String,
}

/// A receipt whose required fields are present and whose monetary fields parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: Money,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: Money,
}

impl TryFrom<ReceiptSubmission> for Receipt {
    type Error = SubmissionError;

    /// Any missing field or unparseable amount rejects the whole receipt.
    fn try_from(submission: ReceiptSubmission) -> Result<Self, Self::Error> {
        let ReceiptSubmission {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        } = submission;

        require("retailer", &retailer)?;
        require("purchaseDate", &purchase_date)?;
        require("purchaseTime", &purchase_time)?;
        require("total", &total)?;
        if items.is_empty() {
            return Err(SubmissionError::NoItems);
        }

        let total = Money::parse("total", &total)?;
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                if item.short_description.is_empty() {
                    return Err(SubmissionError::MissingField(format!(
                        "items[{index}].shortDescription"
                    )));
                }
                if item.price.is_empty() {
                    return Err(SubmissionError::MissingField(format!(
                        "items[{index}].price"
                    )));
                }
                Ok(Item {
                    price: Money::parse("price", &item.price)?,
                    short_description: item.short_description,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            retailer,
            purchase_date,
            purchase_time,
            total,
            items,
        })
    }
}

fn require(field: &str, value: &str) -> Result<(), SubmissionError> {
    if value.is_empty() {
        Err(SubmissionError::MissingField(field.to_string()))
    } else {
        Ok(())
    }
}

/// Receipt as held by the store, with the id it was assigned on intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredReceipt {
    pub id: ReceiptId,
    #[serde(flatten)]
    pub receipt: Receipt,
}

/// Reasons a submission is refused before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("required field '{0}' is missing or empty")]
    MissingField(String),
    #[error("receipt must contain at least one item")]
    NoItems,
    #[error(transparent)]
    InvalidMonetaryValue(#[from] MonetaryError),
}

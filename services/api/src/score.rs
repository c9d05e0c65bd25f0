use crate::infra::{read_submission, receipt_service};
use clap::Args;
use receipt_points::error::AppError;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Receipt JSON file in the same shape accepted by POST /receipts/process
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Print the step-by-step breakdown instead of just the points
    #[arg(long)]
    pub(crate) steps: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let report = score_file(&args.file, args.steps)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn score_file(path: &Path, steps: bool) -> Result<Value, AppError> {
    let submission = read_submission(path)?;
    let outcome = receipt_service().evaluate(submission)?;

    if steps {
        Ok(serde_json::to_value(outcome.breakdown())?)
    } else {
        Ok(json!({ "points": outcome.points }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_fixture(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "receipt-points-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).expect("fixture written");
        path
    }

    const CORNER_MARKET: &str = r#"{
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    }"#;

    #[test]
    fn scores_receipt_file() {
        let path = write_fixture("points", CORNER_MARKET);
        let report = score_file(&path, false).expect("scores");
        fs::remove_file(&path).ok();

        assert_eq!(report, json!({ "points": 109 }));
    }

    #[test]
    fn prints_breakdown_when_steps_requested() {
        let path = write_fixture("steps", CORNER_MARKET);
        let report = score_file(&path, true).expect("scores");
        fs::remove_file(&path).ok();

        assert_eq!(report["result"], 109);
        assert!(report["multipleTotal"].is_string());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("receipt-points-does-not-exist.json");
        assert!(matches!(score_file(&path, false), Err(AppError::Io(_))));
    }

    #[test]
    fn malformed_json_is_payload_error() {
        let path = write_fixture("malformed", "{ \"retailer\": ");
        let result = score_file(&path, false);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Payload(_))));
    }

    #[test]
    fn invalid_total_is_receipt_error() {
        let path = write_fixture("invalid", &CORNER_MARKET.replace("9.00", "nine"));
        let result = score_file(&path, false);
        fs::remove_file(&path).ok();

        match result {
            Err(err @ AppError::Receipt(_)) => assert!(err.to_string().contains("nine")),
            other => panic!("expected receipt error, got {other:?}"),
        }
    }
}

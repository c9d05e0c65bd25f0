use serde::Serialize;

use super::{ScoreOutcome, ScoringRule};

/// Step-by-step explanation of a score, built fresh for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphanumeric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_total: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_items: Option<String>,
    pub description_multiple: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odd_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_time: Option<String>,
    pub result: u64,
}

impl ScoreBreakdown {
    pub fn collect(outcome: &ScoreOutcome) -> Self {
        let mut breakdown = Self {
            result: outcome.points,
            ..Self::default()
        };

        for component in &outcome.components {
            let slot = match component.rule {
                ScoringRule::RetailerName => &mut breakdown.alphanumeric,
                ScoringRule::RoundTotal => &mut breakdown.round_total,
                ScoringRule::QuarterMultiple => &mut breakdown.multiple_total,
                ScoringRule::ItemPairs => &mut breakdown.number_of_items,
                ScoringRule::OddPurchaseDay => &mut breakdown.odd_day,
                ScoringRule::AfternoonPurchase => &mut breakdown.purchase_time,
                ScoringRule::DescriptionLength => {
                    breakdown
                        .description_multiple
                        .extend(component.notes.iter().cloned());
                    continue;
                }
            };

            if !component.notes.is_empty() {
                *slot = Some(component.notes.join("; "));
            }
        }

        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipts::scoring::ScoreComponent;

    fn component(rule: ScoringRule, points: u64, notes: &[&str]) -> ScoreComponent {
        ScoreComponent {
            rule,
            points,
            notes: notes.iter().map(|note| note.to_string()).collect(),
        }
    }

    #[test]
    fn collect_places_notes_by_rule() {
        let outcome = ScoreOutcome {
            points: 17,
            components: vec![
                component(ScoringRule::RetailerName, 6, &["six"]),
                component(ScoringRule::RoundTotal, 0, &[]),
                component(ScoringRule::ItemPairs, 5, &["pairs"]),
                component(ScoringRule::DescriptionLength, 6, &["first", "second"]),
            ],
        };

        let breakdown = ScoreBreakdown::collect(&outcome);

        assert_eq!(breakdown.alphanumeric.as_deref(), Some("six"));
        assert!(breakdown.round_total.is_none());
        assert_eq!(breakdown.number_of_items.as_deref(), Some("pairs"));
        assert_eq!(breakdown.description_multiple, vec!["first", "second"]);
        assert_eq!(breakdown.result, 17);
    }

    #[test]
    fn serializes_rationale_fields_in_camel_case() {
        let breakdown = ScoreBreakdown {
            multiple_total: Some("quarter".to_string()),
            result: 25,
            ..ScoreBreakdown::default()
        };

        let value = serde_json::to_value(&breakdown).expect("serializes");
        assert_eq!(value["multipleTotal"], "quarter");
        assert_eq!(value["result"], 25);
        assert_eq!(value["descriptionMultiple"], serde_json::json!([]));
        assert!(value.get("roundTotal").is_none());
    }
}

pub(crate) mod rules;
mod trace;

pub use trace::ScoreBreakdown;

use super::domain::Receipt;

/// Stateless evaluator applying the seven points rules to a receipt.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointsEngine;

impl PointsEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, receipt: &Receipt) -> ScoreOutcome {
        let components = rules::score_receipt(receipt);
        let points = components
            .iter()
            .fold(0u64, |total, component| total.saturating_add(component.points));

        ScoreOutcome { points, components }
    }
}

/// The scoring rules, in the order their rationale is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    RetailerName,
    RoundTotal,
    QuarterMultiple,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

/// Discrete contribution of one rule, with the notes explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: Vec<String>,
}

impl ScoreComponent {
    fn nothing(rule: ScoringRule) -> Self {
        Self {
            rule,
            points: 0,
            notes: Vec::new(),
        }
    }
}

/// Result of scoring a receipt: the sum plus every rule's contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub points: u64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreOutcome {
    pub fn component(&self, rule: ScoringRule) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.rule == rule)
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        ScoreBreakdown::collect(self)
    }
}

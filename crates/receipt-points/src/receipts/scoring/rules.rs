use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::super::domain::Receipt;
use super::{ScoreComponent, ScoringRule};

const ROUND_TOTAL_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_HOURS: [u32; 2] = [14, 15];

/// Run every rule against the receipt, in rationale order.
pub(crate) fn score_receipt(receipt: &Receipt) -> Vec<ScoreComponent> {
    vec![
        retailer_name(receipt),
        round_total(receipt),
        quarter_multiple(receipt),
        item_pairs(receipt),
        description_length(receipt),
        odd_purchase_day(receipt),
        afternoon_purchase(receipt),
    ]
}

pub(crate) fn retailer_name(receipt: &Receipt) -> ScoreComponent {
    let count = receipt
        .retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    ScoreComponent {
        rule: ScoringRule::RetailerName,
        points: count,
        notes: vec![format!(
            "retailer name has {count} alphanumeric characters, adding {count} points"
        )],
    }
}

pub(crate) fn round_total(receipt: &Receipt) -> ScoreComponent {
    if receipt.total.value().fract().is_zero() {
        ScoreComponent {
            rule: ScoringRule::RoundTotal,
            points: ROUND_TOTAL_POINTS,
            notes: vec![format!(
                "total {} is a round dollar amount, adding {ROUND_TOTAL_POINTS} points",
                receipt.total
            )],
        }
    } else {
        ScoreComponent::nothing(ScoringRule::RoundTotal)
    }
}

pub(crate) fn quarter_multiple(receipt: &Receipt) -> ScoreComponent {
    if is_quarter(receipt.total.value().fract()) {
        ScoreComponent {
            rule: ScoringRule::QuarterMultiple,
            points: QUARTER_MULTIPLE_POINTS,
            notes: vec![format!(
                "total {} is a multiple of 0.25, adding {QUARTER_MULTIPLE_POINTS} points",
                receipt.total
            )],
        }
    } else {
        ScoreComponent::nothing(ScoringRule::QuarterMultiple)
    }
}

fn is_quarter(fraction: Decimal) -> bool {
    [dec!(0), dec!(0.25), dec!(0.5), dec!(0.75)].contains(&fraction)
}

pub(crate) fn item_pairs(receipt: &Receipt) -> ScoreComponent {
    let count = receipt.items.len() as u64;
    let points = (count / 2) * POINTS_PER_ITEM_PAIR;

    ScoreComponent {
        rule: ScoringRule::ItemPairs,
        points,
        notes: vec![format!("{count} items on receipt, adding {points} points")],
    }
}

/// Items whose trimmed description is a multiple of three bytes long earn 20% of their
/// price, rounded up to the next whole point.
pub(crate) fn description_length(receipt: &Receipt) -> ScoreComponent {
    let mut points: u64 = 0;
    let mut notes = Vec::new();

    for item in &receipt.items {
        let trimmed = item.short_description.trim();
        if trimmed.len() % 3 != 0 {
            continue;
        }

        let awarded = price_share(item.price.value());
        points = points.saturating_add(awarded);
        notes.push(format!(
            "'{trimmed}' has a trimmed length divisible by three, adding {awarded} points"
        ));
    }

    ScoreComponent {
        rule: ScoringRule::DescriptionLength,
        points,
        notes,
    }
}

/// Saturates at `u64::MAX` for prices whose share does not fit in a point count.
fn price_share(price: Decimal) -> u64 {
    price
        .checked_mul(dec!(0.2))
        .and_then(|share| share.ceil().to_u64())
        .unwrap_or(u64::MAX)
}

pub(crate) fn odd_purchase_day(receipt: &Receipt) -> ScoreComponent {
    match purchase_day(&receipt.purchase_date) {
        Some(day) if day % 2 == 1 => ScoreComponent {
            rule: ScoringRule::OddPurchaseDay,
            points: ODD_DAY_POINTS,
            notes: vec![format!(
                "purchase day {day} is odd, adding {ODD_DAY_POINTS} points"
            )],
        },
        _ => ScoreComponent::nothing(ScoringRule::OddPurchaseDay),
    }
}

/// Day of month taken from the one or two trailing digits after the last separator.
fn purchase_day(date: &str) -> Option<u32> {
    let (_, day) = date.rsplit_once(|c: char| c == '-' || c == '/')?;
    if !(1..=2).contains(&day.len()) || !day.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    day.parse().ok()
}

pub(crate) fn afternoon_purchase(receipt: &Receipt) -> ScoreComponent {
    match purchase_hour(&receipt.purchase_time) {
        Some(hour) if AFTERNOON_HOURS.contains(&hour) => ScoreComponent {
            rule: ScoringRule::AfternoonPurchase,
            points: AFTERNOON_POINTS,
            notes: vec![format!(
                "purchase at {} falls between 2pm and 4pm, adding {AFTERNOON_POINTS} points",
                receipt.purchase_time
            )],
        },
        _ => ScoreComponent::nothing(ScoringRule::AfternoonPurchase),
    }
}

fn purchase_hour(time: &str) -> Option<u32> {
    let (hour, minute) = time.split_once(':')?;
    let digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute) {
        return None;
    }
    hour.parse().ok()
}

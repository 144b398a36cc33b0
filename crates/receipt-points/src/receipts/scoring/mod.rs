mod rules;

use serde::{Deserialize, Serialize};

use super::domain::Receipt;

/// Independent point rules applied to every receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemDescriptions,
    ItemPairs,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl PointsRule {
    pub fn label(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "retailer name",
            PointsRule::RoundDollarTotal => "round dollar total",
            PointsRule::QuarterMultipleTotal => "quarter multiple total",
            PointsRule::ItemDescriptions => "item descriptions",
            PointsRule::ItemPairs => "item pairs",
            PointsRule::OddPurchaseDay => "odd purchase day",
            PointsRule::AfternoonPurchase => "afternoon purchase",
        }
    }
}

/// Contribution of a single rule, kept for audit output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsComponent {
    pub rule: PointsRule,
    pub points: i64,
    pub notes: String,
}

/// Per-rule contributions and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub total: i64,
    pub components: Vec<PointsComponent>,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: PointsRule) -> i64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .fold(0i64, |sum, component| sum.saturating_add(component.points))
    }
}

/// Scores a receipt rule by rule.
///
/// Never fails: a field that does not parse only zeroes the rules that read it.
pub fn score_receipt(receipt: &Receipt) -> PointsBreakdown {
    let components = vec![
        rules::retailer_name(receipt),
        rules::round_dollar_total(receipt),
        rules::quarter_multiple_total(receipt),
        rules::item_descriptions(receipt),
        rules::item_pairs(receipt),
        rules::odd_purchase_day(receipt),
        rules::afternoon_purchase(receipt),
    ];
    let total = components
        .iter()
        .fold(0i64, |sum, component| sum.saturating_add(component.points));

    PointsBreakdown { total, components }
}

pub fn compute_points(receipt: &Receipt) -> i64 {
    score_receipt(receipt).total
}

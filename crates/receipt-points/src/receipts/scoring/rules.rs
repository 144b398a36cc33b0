use chrono::{Datelike, Timelike};

use super::super::domain::Receipt;
use super::{PointsComponent, PointsRule};

const ROUND_DOLLAR_BONUS: i64 = 50;
const QUARTER_MULTIPLE_BONUS: i64 = 25;
const ITEM_PAIR_BONUS: i64 = 5;
const ODD_DAY_BONUS: i64 = 6;
const AFTERNOON_BONUS: i64 = 10;
const ITEM_PRICE_MULTIPLIER: f64 = 0.2;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

fn component(rule: PointsRule, points: i64, notes: String) -> PointsComponent {
    PointsComponent {
        rule,
        points,
        notes,
    }
}

pub(super) fn retailer_name(receipt: &Receipt) -> PointsComponent {
    let count = receipt
        .retailer
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as i64;

    component(
        PointsRule::RetailerName,
        count,
        format!("{count} alphanumeric characters in retailer name"),
    )
}

pub(super) fn round_dollar_total(receipt: &Receipt) -> PointsComponent {
    match receipt.total_amount() {
        Some(total) if total.fract() == 0.0 && total >= 1.0 => component(
            PointsRule::RoundDollarTotal,
            ROUND_DOLLAR_BONUS,
            format!("total {} is a whole dollar amount", receipt.total),
        ),
        Some(_) => component(
            PointsRule::RoundDollarTotal,
            0,
            format!("total {} is not a whole dollar amount of at least 1", receipt.total),
        ),
        None => component(
            PointsRule::RoundDollarTotal,
            0,
            format!("total '{}' could not be parsed", receipt.total),
        ),
    }
}

pub(super) fn quarter_multiple_total(receipt: &Receipt) -> PointsComponent {
    match receipt.total_amount() {
        Some(total) if (total * 100.0) % 25.0 == 0.0 => component(
            PointsRule::QuarterMultipleTotal,
            QUARTER_MULTIPLE_BONUS,
            format!("total {} is a multiple of 0.25", receipt.total),
        ),
        Some(_) => component(
            PointsRule::QuarterMultipleTotal,
            0,
            format!("total {} is not a multiple of 0.25", receipt.total),
        ),
        None => component(
            PointsRule::QuarterMultipleTotal,
            0,
            format!("total '{}' could not be parsed", receipt.total),
        ),
    }
}

pub(super) fn item_descriptions(receipt: &Receipt) -> PointsComponent {
    let mut points: i64 = 0;
    let mut qualifying = 0;

    for item in &receipt.items {
        let length = item.short_description.trim().chars().count();
        if length == 0 || length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
            continue;
        }
        if let Some(price) = item.price_amount() {
            // float-to-int casts saturate; keep the running sum saturating too
            points = points.saturating_add((price * ITEM_PRICE_MULTIPLIER).ceil() as i64);
            qualifying += 1;
        }
    }

    component(
        PointsRule::ItemDescriptions,
        points,
        format!("{qualifying} item(s) with description length divisible by 3"),
    )
}

pub(super) fn item_pairs(receipt: &Receipt) -> PointsComponent {
    let pairs = (receipt.items.len() / 2) as i64;

    component(
        PointsRule::ItemPairs,
        pairs * ITEM_PAIR_BONUS,
        format!("{pairs} pair(s) of items"),
    )
}

pub(super) fn odd_purchase_day(receipt: &Receipt) -> PointsComponent {
    match receipt.purchase_date() {
        Some(date) if date.day() % 2 == 1 => component(
            PointsRule::OddPurchaseDay,
            ODD_DAY_BONUS,
            format!("purchased on odd day {}", date.day()),
        ),
        Some(date) => component(
            PointsRule::OddPurchaseDay,
            0,
            format!("purchased on even day {}", date.day()),
        ),
        None => component(
            PointsRule::OddPurchaseDay,
            0,
            format!("purchase date '{}' could not be parsed", receipt.purchase_date),
        ),
    }
}

pub(super) fn afternoon_purchase(receipt: &Receipt) -> PointsComponent {
    match receipt.purchase_time() {
        Some(time) if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&time.hour()) => {
            component(
                PointsRule::AfternoonPurchase,
                AFTERNOON_BONUS,
                format!("purchased at {} between 14:00 and 16:00", receipt.purchase_time),
            )
        }
        Some(_) => component(
            PointsRule::AfternoonPurchase,
            0,
            format!("purchased at {} outside 14:00-16:00", receipt.purchase_time),
        ),
        None => component(
            PointsRule::AfternoonPurchase,
            0,
            format!("purchase time '{}' could not be parsed", receipt.purchase_time),
        ),
    }
}

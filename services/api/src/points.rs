use crate::infra::load_receipt;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{score_receipt, validate_receipt, PointsBreakdown};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PointsArgs {
    /// Path to a receipt JSON document
    #[arg(long)]
    pub(crate) receipt: PathBuf,
    /// Print the contribution of every rule
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_points(args: PointsArgs) -> Result<(), AppError> {
    let PointsArgs { receipt, explain } = args;

    let receipt = load_receipt(&receipt)?;
    if let Err(err) = validate_receipt(&receipt) {
        eprintln!("warning: {err}; the service would reject this receipt");
    }

    let breakdown = score_receipt(&receipt);
    println!("Retailer: {}", receipt.retailer.trim());
    println!("Points: {}", breakdown.total);

    if explain {
        println!("\nRule breakdown");
        for line in breakdown_lines(&breakdown) {
            println!("{line}");
        }
    }

    Ok(())
}

fn breakdown_lines(breakdown: &PointsBreakdown) -> Vec<String> {
    breakdown
        .components
        .iter()
        .map(|component| {
            format!(
                "- {}: {} ({})",
                component.rule.label(),
                component.points,
                component.notes
            )
        })
        .collect()
}

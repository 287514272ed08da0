//! Plain-text renderings of an estimate for the share and print collaborators.

use std::iter;

use buildcost_types::{CalculationResult, ConstructionType, EstimateInput};
use unicode_width::UnicodeWidthStr;

use crate::currency::{CurrencyStyle, format_inr, group_indian};

const LABEL_WIDTH: usize = 26;

/// Message handed to the share collaborator.
#[must_use]
pub fn share_text(
    area_text: &str,
    result: &CalculationResult,
    page_url: &str,
    style: CurrencyStyle,
) -> String {
    format!(
        "BuildCost 2026 Estimate:\nTotal Area: {} sq ft\nEstimated Total: {}\nCheck yours at: {page_url}",
        area_text.trim(),
        format_inr(result.final_total, style)
    )
}

/// `₹2,000/sq ft`
#[must_use]
pub fn rate_label(kind: ConstructionType, style: CurrencyStyle) -> String {
    format!(
        "{}{}/sq ft",
        style.prefix(),
        group_indian(&format!("{:.0}", kind.base_rate()))
    )
}

/// Printable quote: the inputs followed by the full breakdown, amounts right-aligned.
#[must_use]
pub fn quote_text(
    input: &EstimateInput,
    result: &CalculationResult,
    style: CurrencyStyle,
) -> String {
    let amounts = [
        ("Cost per sq ft", format_inr(result.cost_per_sq_ft, style)),
        ("Base construction cost", format_inr(result.base_cost, style)),
        ("City adjusted cost", format_inr(result.city_adjusted_cost, style)),
        ("Material adjustment cost", format_inr(result.material_adjustment, style)),
        ("Subtotal", format_inr(result.subtotal, style)),
        ("5% contingency", format_inr(result.contingency, style)),
    ];
    let total = format_inr(result.final_total, style);

    let value_width = amounts
        .iter()
        .map(|(_, value)| value.width())
        .chain(iter::once(total.width()))
        .max()
        .unwrap_or(0);
    let rule_width = LABEL_WIDTH + value_width;

    let mut out = String::new();
    out.push_str("BuildCost Estimate (2026 Index)\n");
    out.push_str(&"=".repeat(rule_width));
    out.push('\n');

    push_field(&mut out, "Total area", &format!("{} sq ft", input.area.sq_ft()));
    push_field(
        &mut out,
        "Construction quality",
        &format!(
            "{} ({})",
            input.construction_type.display_name(),
            rate_label(input.construction_type, style)
        ),
    );
    push_field(
        &mut out,
        "City tier",
        &format!(
            "{} ({})",
            input.city_type.display_name(),
            input.city_type.description()
        ),
    );
    push_field(
        &mut out,
        "Material finish",
        &format!("+{}%", input.material_percent.value()),
    );

    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    for (label, value) in &amounts {
        push_amount(&mut out, label, value, value_width);
    }
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');
    push_amount(&mut out, "Final estimated total", &total, value_width);

    out.push('\n');
    out.push_str("Estimates are for guidance only. Verify local market rates before building.\n");
    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<LABEL_WIDTH$}{value}\n"));
}

fn push_amount(out: &mut String, label: &str, value: &str, value_width: usize) {
    let pad = value_width.saturating_sub(value.width());
    out.push_str(&format!("{label:<LABEL_WIDTH$}{}{value}\n", " ".repeat(pad)));
}

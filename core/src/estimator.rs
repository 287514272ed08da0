use buildcost_types::{
    Area, CONTINGENCY_RATE, CalculationResult, CityType, ConstructionType, EstimateInput,
    MaterialPercent,
};
use tracing::debug;

/// Itemize the cost of building `input.area` square feet.
///
/// Each step feeds the next: base cost, city adjustment, material uplift,
/// subtotal, contingency, total, and the per-square-foot figure.
#[must_use]
pub fn estimate(input: &EstimateInput) -> CalculationResult {
    let area = input.area.sq_ft();

    let base_cost = area * input.construction_type.base_rate();
    let city_adjusted_cost = base_cost * input.city_type.multiplier();
    let material_adjustment = city_adjusted_cost * input.material_percent.fraction();
    let subtotal = city_adjusted_cost + material_adjustment;
    let contingency = subtotal * CONTINGENCY_RATE;
    let final_total = subtotal + contingency;
    let cost_per_sq_ft = final_total / area;

    CalculationResult {
        base_cost,
        city_adjusted_cost,
        material_adjustment,
        subtotal,
        contingency,
        final_total,
        cost_per_sq_ft,
    }
}

/// Estimate straight from the form's area text.
///
/// Returns `None` when the text is empty, not a number, or not positive;
/// that is the "no estimate available" state, not an error.
#[must_use]
pub fn estimate_from_text(
    area_text: &str,
    construction_type: ConstructionType,
    city_type: CityType,
    material_percent: MaterialPercent,
) -> Option<CalculationResult> {
    let area = match Area::parse(area_text) {
        Ok(area) => area,
        Err(err) => {
            debug!(input = area_text, "No estimate: {err}");
            return None;
        }
    };

    Some(estimate(&EstimateInput {
        area,
        construction_type,
        city_type,
        material_percent,
    }))
}

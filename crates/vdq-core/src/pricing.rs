//! Delivery pricing arithmetic.
//!
//! Pure and deterministic: a distance plus the dealer's pricing parameters
//! in, a [`CostResult`] out. No validation is performed here — callers are
//! expected to supply non-negative, finite values.

use serde::Serialize;

/// Outcome of a single pricing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResult {
    /// Quoted charge in decimal currency units (e.g. `10.75`). Unrounded.
    pub cost_estimate: f64,
    /// The portion of the journey actually billed, in miles.
    pub charged_miles: f64,
    /// Whether the minimum-cost floor overrode the per-mile charge.
    pub used_minimum_cost: bool,
}

/// Computes the delivery charge for a journey of `total_miles`.
///
/// Journeys at or inside the free radius (`total_miles <= free_distance`,
/// inclusive) cost nothing. Outside it, the billed distance is the full
/// journey, or the journey minus the free radius when
/// `deduct_free_distance` is set. The minimum-cost floor kicks in only when
/// the per-mile charge is strictly below `minimum_cost`; a charge exactly
/// equal to the floor is reported with `used_minimum_cost = false`. A
/// `minimum_cost` of zero disables the floor.
#[must_use]
pub fn calculate_cost(
    total_miles: f64,
    cost_per_mile: f64,
    free_distance: f64,
    minimum_cost: f64,
    deduct_free_distance: bool,
) -> CostResult {
    // Within the free delivery radius (boundary included): no charge.
    if total_miles <= free_distance {
        return CostResult {
            cost_estimate: 0.0,
            charged_miles: 0.0,
            used_minimum_cost: false,
        };
    }

    let charged_miles = if deduct_free_distance {
        total_miles - free_distance
    } else {
        total_miles
    };

    let cost_estimate = cost_per_mile * charged_miles;

    if cost_estimate < minimum_cost {
        return CostResult {
            cost_estimate: minimum_cost,
            charged_miles,
            used_minimum_cost: true,
        };
    }

    CostResult {
        cost_estimate,
        charged_miles,
        used_minimum_cost: false,
    }
}

#[cfg(test)]
#[path = "pricing_test.rs"]
mod tests;

//! Turns a distance-lookup outcome into the consumer-facing quote response.

use crate::pricing::calculate_cost;
use crate::types::{DistanceResult, QuoteParams, QuoteResponse};

/// Builds the final [`QuoteResponse`] from a successful lookup body.
///
/// A missing or null `Miles` field means the postcodes could not be
/// resolved (code 400). A present but unparseable value means the service
/// answered with garbage and the calculation cannot proceed (code 500).
/// Otherwise the pricing engine runs and the journey is deliverable iff it
/// is strictly shorter than the dealer's maximum distance.
#[must_use]
pub fn build_response(lookup: &DistanceResult, params: &QuoteParams) -> QuoteResponse {
    let Some(raw_miles) = &lookup.miles else {
        return QuoteResponse::error(400);
    };

    let Some(total_miles) = parse_miles(raw_miles) else {
        return QuoteResponse::error(500);
    };

    let cost = calculate_cost(
        total_miles,
        params.cost_per_mile,
        params.free_distance,
        params.minimum_cost,
        params.deduct_free_distance,
    );

    // Strictly less than: a journey exactly at the maximum is refused.
    let can_deliver = total_miles < params.maximum_distance;
    QuoteResponse::success(can_deliver, total_miles, cost)
}

/// Extracts a usable distance from the raw `Miles` value.
///
/// Accepts JSON numbers and numeric strings; rejects NaN and everything
/// else (booleans, objects, non-numeric strings).
fn parse_miles(raw: &serde_json::Value) -> Option<f64> {
    let miles = match raw {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if miles.is_nan() {
        return None;
    }
    Some(miles)
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;

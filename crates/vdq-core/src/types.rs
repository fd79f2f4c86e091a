//! Request, lookup and response shapes for the delivery quote flow.
//!
//! `QuoteResponse` is the consumer-facing JSON contract used by the quote
//! form, so its field names are fixed camelCase and the error variant
//! carries explicit nulls rather than omitting fields.

use serde::{Deserialize, Serialize};

use crate::pricing::CostResult;

/// Per-request quote input: the two endpoints of the journey plus the
/// dealer's pricing parameters. Supplied fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub dealer_postcode: String,
    pub customer_postcode: String,
    /// Rate in decimal currency units per mile (e.g. `0.62` for 62 pence).
    pub cost_per_mile: f64,
    /// Radius in miles within which delivery is free.
    pub free_distance: f64,
    /// Price floor in decimal currency units; `0` disables it.
    pub minimum_cost: f64,
    /// Subtract the free radius from billed miles once outside it.
    pub deduct_free_distance: bool,
    /// Journeys at or beyond this distance are refused (quote still given).
    pub maximum_distance: f64,
}

/// Body returned by the distance-lookup service.
///
/// The `Miles` field is kept as raw JSON: the upstream service has been
/// observed returning numbers, numeric strings, and null, and the response
/// builder must distinguish "absent" from "present but unparseable".
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceResult {
    #[serde(rename = "Miles", default)]
    pub miles: Option<serde_json::Value>,
}

/// Body of the `errors` field on an error-variant [`QuoteResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// The single externally observable output of a quote request.
///
/// Exactly one variant is populated per call: either `has_result` is true
/// and the distance/cost fields carry values with `errors`/`error_code`
/// null, or `has_result` is false and every numeric field is null with
/// `errors` and `error_code` set. The two field sets never overlap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub has_result: bool,
    pub can_deliver: bool,
    pub errors: Option<ErrorBody>,
    pub total_miles: Option<f64>,
    pub charged_miles: Option<f64>,
    pub cost_estimate: Option<f64>,
    pub used_minimum_cost: Option<bool>,
    pub error_code: Option<u16>,
}

impl QuoteResponse {
    /// Assembles a result-variant response from a completed calculation.
    #[must_use]
    pub fn success(can_deliver: bool, total_miles: f64, cost: CostResult) -> Self {
        Self {
            has_result: true,
            can_deliver,
            errors: None,
            total_miles: Some(total_miles),
            charged_miles: Some(cost.charged_miles),
            cost_estimate: Some(cost.cost_estimate),
            used_minimum_cost: Some(cost.used_minimum_cost),
            error_code: None,
        }
    }

    /// Assembles an error-variant response for the given upstream code.
    ///
    /// 500 means the lookup service itself failed (unreachable, or returned
    /// something we could not use); every other code — the service only
    /// ever produces 400 in practice — means the postcodes could not be
    /// resolved or routed between.
    #[must_use]
    pub fn error(error_code: u16) -> Self {
        let message = if error_code == 500 {
            "Failed to calculate cost"
        } else {
            "Invalid postcode"
        };
        Self {
            has_result: false,
            can_deliver: false,
            errors: Some(ErrorBody {
                error: message.to_owned(),
            }),
            total_miles: None,
            charged_miles: None,
            cost_estimate: None,
            used_minimum_cost: None,
            error_code: Some(error_code),
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

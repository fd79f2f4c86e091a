//! HTTP client for the vehicle-delivery-distance API.
//!
//! Wraps `reqwest` with typed request/response bodies and maps every
//! failure mode onto the 400/500 scheme the quote consumer understands:
//! the upstream status passes through when there is one, and anything
//! transport-level reports as 500.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Serialize;
use tracing::{debug, warn};

use vdq_core::{build_response, DistanceResult, QuoteParams, QuoteResponse};

use crate::error::DistanceError;

const DEFAULT_BASE_URL: &str = "https://app.autohub.uk/";
const LOOKUP_PATH: &str = "api/vehicle-delivery-distance";

/// Request body for the distance lookup. Field names are the service's
/// own PascalCase contract.
#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    #[serde(rename = "DealerAddress")]
    dealer_address: PostcodeBody<'a>,
    #[serde(rename = "CustomerAddress")]
    customer_address: PostcodeBody<'a>,
}

#[derive(Debug, Serialize)]
struct PostcodeBody<'a> {
    #[serde(rename = "Postcode")]
    postcode: &'a str,
}

/// Client for the vehicle-delivery-distance API.
///
/// Use [`DistanceClient::new`] for production or
/// [`DistanceClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug)]
pub struct DistanceClient {
    client: Client,
    base_url: Url,
}

impl DistanceClient {
    /// Creates a client pointed at the production distance API.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, DistanceError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DistanceError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, DistanceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("vdq/0.1 (delivery-quote)")
            .build()?;

        // Normalise: a single trailing slash so the lookup path joins onto
        // the root rather than replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| DistanceError::InvalidBaseUrl {
            base_url: normalised.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Fetches the driving distance in miles between two postcodes.
    ///
    /// # Errors
    ///
    /// - [`DistanceError::UnexpectedStatus`] if the service answers non-2xx.
    /// - [`DistanceError::Http`] on network failure.
    /// - [`DistanceError::Deserialize`] if the body is not the expected JSON.
    pub async fn lookup(
        &self,
        dealer_postcode: &str,
        customer_postcode: &str,
    ) -> Result<DistanceResult, DistanceError> {
        let url = self
            .base_url
            .join(LOOKUP_PATH)
            .map_err(|e| DistanceError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        let body = LookupRequest {
            dealer_address: PostcodeBody {
                postcode: dealer_postcode,
            },
            customer_address: PostcodeBody {
                postcode: customer_postcode,
            },
        };

        debug!(%url, dealer_postcode, customer_postcode, "looking up delivery distance");
        let response = self.client.post(url.clone()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "distance lookup failed");
            return Err(DistanceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| DistanceError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Produces a complete quote for the given request.
    ///
    /// Runs the distance lookup and folds the outcome into a
    /// [`QuoteResponse`]. Failures never escape as `Err`: a lookup error
    /// becomes the error-variant response carrying the upstream status
    /// code (500 when there is none).
    pub async fn quote(&self, params: &QuoteParams) -> QuoteResponse {
        match self
            .lookup(&params.dealer_postcode, &params.customer_postcode)
            .await
        {
            Ok(lookup) => build_response(&lookup, params),
            Err(e) => {
                warn!(error = %e, "distance lookup error, returning error quote");
                QuoteResponse::error(e.status_code())
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

pub mod pricing;
pub mod response;
pub mod types;

pub use pricing::{calculate_cost, CostResult};
pub use response::build_response;
pub use types::{DistanceResult, QuoteParams, QuoteResponse};

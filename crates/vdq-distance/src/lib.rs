pub mod client;
pub mod error;

pub use client::DistanceClient;
pub use error::DistanceError;

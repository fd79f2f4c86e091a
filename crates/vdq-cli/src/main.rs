use clap::Parser;

use vdq_core::QuoteParams;
use vdq_distance::DistanceClient;

#[derive(Debug, Parser)]
#[command(name = "vdq")]
#[command(about = "Quote a vehicle delivery charge between two postcodes")]
struct Cli {
    /// Dealer (origin) postcode.
    #[arg(long)]
    dealer_postcode: String,

    /// Customer (destination) postcode.
    #[arg(long)]
    customer_postcode: String,

    /// Rate per mile in decimal currency units (e.g. 0.62 for 62 pence).
    #[arg(long)]
    cost_per_mile: f64,

    /// Radius in miles within which delivery is free.
    #[arg(long, default_value_t = 0.0)]
    free_distance: f64,

    /// Price floor in decimal currency units; 0 disables it.
    #[arg(long, default_value_t = 0.0)]
    minimum_cost: f64,

    /// Subtract the free radius from billed miles once outside it.
    #[arg(long)]
    deduct_free_distance: bool,

    /// Journeys at or beyond this many miles are refused.
    #[arg(long)]
    maximum_distance: f64,

    /// Base URL of the distance-lookup service.
    #[arg(long, env = "VDQ_DISTANCE_URL")]
    base_url: Option<String>,

    /// Request timeout for the distance lookup, in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = match &cli.base_url {
        Some(url) => DistanceClient::with_base_url(cli.timeout_secs, url)?,
        None => DistanceClient::new(cli.timeout_secs)?,
    };

    let params = QuoteParams {
        dealer_postcode: cli.dealer_postcode,
        customer_postcode: cli.customer_postcode,
        cost_per_mile: cli.cost_per_mile,
        free_distance: cli.free_distance,
        minimum_cost: cli.minimum_cost,
        deduct_free_distance: cli.deduct_free_distance,
        maximum_distance: cli.maximum_distance,
    };

    // An error-variant quote is still a quote; only setup failures exit non-zero.
    let response = client.quote(&params).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

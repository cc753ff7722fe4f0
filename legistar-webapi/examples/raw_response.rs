//! Fetch a raw resource from a live Legistar site and pretty-print the JSON.
//!
//! Usage: cargo run --example raw_response [resource]

use legistar_webapi::{Configuration, WebApiClient};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let resource = std::env::args().nth(1).unwrap_or_else(|| "bodies".to_string());

    let config = Arc::new(Configuration {
        token: std::env::var("LEGISTAR_API_TOKEN").ok(),
        ..Configuration::default()
    });
    let client = WebApiClient::new(config);

    let value = client.fetch_resource(&resource).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

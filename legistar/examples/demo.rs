//! Minimal library walkthrough: fetch a dataset, print its columns, then
//! cache it and reload the cached copy.
//!
//! Usage: LEGISTAR_API_TOKEN=... cargo run --example demo

use legistar::{LegistarClient, LegistarConfig, TOKEN_ENV_VAR};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = LegistarConfig::new().with_site("nyc");
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        config = config.with_token(token);
    }

    let client = LegistarClient::with_config(config)?;

    // Columns, inferred in memory
    println!("Columns of 'bodies':");
    for column in client.headers("bodies").await? {
        println!("  {}", column);
    }

    // Persist the payload and read it back from disk
    let (_, path) = client.cache("bodies").await?;
    println!("\nCached to {}", path.display());

    let frame = client.load_cached("bodies").await?;
    println!("Reloaded {} rows, {} columns", frame.len(), frame.columns().len());

    Ok(())
}

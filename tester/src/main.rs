//! Manual smoke harness: drives a running LEXP backend through a canned
//! search and prints what the dashboard would render.
//!
//! ```sh
//! LEXP_URL=http://localhost:1111 LEXP_TOKEN=... cargo run -p lexp-tester
//! ```

use std::env;

use anyhow::Result;
use reqwest::Client;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> Result<()> {
    let base = env::var("LEXP_URL").unwrap_or_else(|_| "http://localhost:1111".to_string());
    let token = env::var("LEXP_TOKEN").unwrap_or_default();
    let client = Client::new();

    let edits = [
        ("jobTitle", "Software Engineer"),
        ("location", "Berlin"),
        ("platform", "linkedin"),
    ];

    for (field, value) in edits {
        client
            .put(format!("{base}/filters"))
            .bearer_auth(&token)
            .json(&json!({ "field": field, "value": value }))
            .send()
            .await?
            .error_for_status()?;
    }

    let view: Value = client
        .post(format!("{base}/search"))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    println!("Total results: {}", view["totalResults"]);
    println!("Has more: {}", view["hasMore"]);

    for profile in view["visible"].as_array().into_iter().flatten() {
        println!("- {} ({})", profile["fullName"], profile["link"]);
    }

    let gate: Value = client
        .post(format!("{base}/actions/export"))
        .bearer_auth(&token)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    println!("Export allowed: {}", gate["allowed"]);

    Ok(())
}

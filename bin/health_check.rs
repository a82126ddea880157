/**
 * Smoke check against a running omps instance
 * Verifies the reported limits match the compiled-in defaults
 */

use omps::constants::{
    ALLOWED_EXTENSIONS, DEFAULT_MAX_CONTENT_LENGTH, DEFAULT_RELEASE_VERSION,
    DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE,
};
use omps::models::HealthResponse;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let base_url = std::env::var("TEST_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());

    println!("Checking omps health at {}", base_url);

    let response = reqwest::Client::new()
        .get(format!("{}/api/health", base_url))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(format!("Health check failed: {}", response.status()).into());
    }

    let health: HealthResponse = response.json().await?;
    println!("   section: {} (developer mode: {})", health.config_section, health.developer_mode);

    let mut mismatches = 0;
    let mut check = |name: &str, actual: String, expected: String| {
        if actual == expected {
            println!("   ok   {}: {}", name, actual);
        } else {
            println!("   diff {}: {} (default {})", name, actual, expected);
            mismatches += 1;
        }
    };

    check(
        "max_content_length",
        health.max_content_length.to_string(),
        DEFAULT_MAX_CONTENT_LENGTH.to_string(),
    );
    check(
        "zipfile_max_uncompressed_size",
        health.zipfile_max_uncompressed_size.to_string(),
        DEFAULT_ZIPFILE_MAX_UNCOMPRESSED_SIZE.to_string(),
    );
    check(
        "default_release_version",
        health.default_release_version.clone(),
        DEFAULT_RELEASE_VERSION.to_string(),
    );
    check(
        "allowed_extensions",
        health.allowed_extensions.join(","),
        ALLOWED_EXTENSIONS.join(","),
    );

    // Overrides are allowed, differences are informational
    println!("\nDone ({} values differ from defaults)", mismatches);
    Ok(())
}

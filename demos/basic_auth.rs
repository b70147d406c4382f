//! Authenticate with the password grant and print org limits.
//!
//! Set SFWIRE_USERNAME, SFWIRE_PASSWORD, SFWIRE_CONSUMER_KEY,
//! SFWIRE_CONSUMER_SECRET (and optionally SFWIRE_SECURITY_TOKEN,
//! SFWIRE_SANDBOX) before running:
//!
//!   cargo run --example basic_auth

use sfwire::{Credentials, PasswordFlowAuth, RestClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let creds = Credentials::from_env()?;
    let session = PasswordFlowAuth::new()?.authenticate(&creds).await?;
    println!("authenticated against {}", session.instance_url);

    let client = RestClient::from_session(&session)?;
    let limits = client.limits().await?;
    println!("{}", serde_json::to_string_pretty(&limits.json_value()?)?);

    Ok(())
}

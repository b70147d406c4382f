//! Create, read, update, and delete an Account record.
//!
//!   cargo run --example rest_crud

use serde_json::json;
use sfwire::{Credentials, PasswordFlowAuth, RestClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let creds = Credentials::from_env()?;
    let session = PasswordFlowAuth::new()?.authenticate(&creds).await?;
    let client = RestClient::from_session(&session)?;

    // Create
    let created = client
        .create("Account", &json!({"Name": "sfwire demo account"}))
        .await?;
    let body = created.json_value()?;
    if !created.is_success() {
        eprintln!("create failed ({}): {}", created.status(), body);
        return Ok(());
    }
    let id = body["id"].as_str().unwrap_or_default().to_string();
    println!("created Account {id}");

    // Read selected fields
    let record = client
        .record_fields("Account", &id, &["Name", "CreatedDate"])
        .await?;
    println!("fetched: {}", record.json_value()?);

    // Update (204 No Content on success)
    let updated = client
        .update("Account", &id, &json!({"Name": "sfwire demo account (renamed)"}))
        .await?;
    println!("update status: {}", updated.status());

    // Query it back
    let result = client
        .query(&format!("SELECT Id, Name FROM Account WHERE Id = '{id}'"))
        .await?;
    println!("queried: {}", result.json_value()?);

    // Delete
    let deleted = client.delete("Account", &id).await?;
    println!("delete status: {}", deleted.status());

    Ok(())
}

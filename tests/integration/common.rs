//! Shared helpers for the integration suite.

use sfwire::{Credentials, RestClient};
use wiremock::MockServer;

pub const ACCESS_TOKEN: &str = "00Dx0000000BV7z!AR8AQAxo9UfVkh8AlV0Gomt9Czx9LjHnSSaiAGQxmPSVXVXzWmWmrXfPB9wo";

pub fn credentials() -> Credentials {
    Credentials::new(
        "user@example.com",
        "hunter2",
        "3MVG9lKcPoNINVBIPJjdw1J9LLM82Hn",
        "9205371918161252363",
    )
    .with_security_token("SECURITYTOKEN")
}

/// A REST client pointed at the mock server, authenticated with the
/// canned token.
pub fn rest_client(server: &MockServer) -> RestClient {
    RestClient::new(server.uri(), ACCESS_TOKEN).expect("client construction")
}

pub fn token_response_body() -> serde_json::Value {
    serde_json::json!({
        "id": "https://login.salesforce.com/id/00Dx0000000BV7z/005x00000012Q9P",
        "issued_at": "1404757726123",
        "token_type": "Bearer",
        "instance_url": "https://na1.salesforce.com",
        "signature": "0CmxinZir53Yex7nE0TD+zMpvIWYGb/bdJh6XfOH6EQ=",
        "access_token": ACCESS_TOKEN
    })
}

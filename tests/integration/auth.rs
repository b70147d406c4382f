//! Password-grant flow against a mocked token endpoint.

use sfwire::{PasswordFlowAuth, RestClient};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn authenticate_returns_session_matching_token_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("password=hunter2SECURITYTOKEN"))
        .and(body_string_contains("format=json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::token_response_body()))
        .expect(1)
        .mount(&server)
        .await;

    let auth = PasswordFlowAuth::new().unwrap().with_login_url(server.uri());
    let session = auth.authenticate(&common::credentials()).await.unwrap();

    // Session fields are exactly the mocked token-endpoint values
    assert_eq!(session.access_token, common::ACCESS_TOKEN);
    assert_eq!(session.instance_url, "https://na1.salesforce.com");
    assert_eq!(session.issued_at.as_deref(), Some("1404757726123"));
    assert_eq!(
        session.signature.as_deref(),
        Some("0CmxinZir53Yex7nE0TD+zMpvIWYGb/bdJh6XfOH6EQ=")
    );
}

#[tokio::test]
async fn session_flows_into_rest_client() {
    let server = MockServer::start().await;

    let mut body = common::token_response_body();
    body["instance_url"] = serde_json::Value::String(server.uri());

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v31.0/sobjects/"))
        .and(header(
            "Authorization",
            format!("Bearer {}", common::ACCESS_TOKEN).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "encoding": "UTF-8",
            "maxBatchSize": 200,
            "sobjects": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let auth = PasswordFlowAuth::new().unwrap().with_login_url(server.uri());
    let session = auth.authenticate(&common::credentials()).await.unwrap();
    let client = RestClient::from_session(&session).unwrap();

    let response = client.sobjects().await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.json_value().unwrap()["maxBatchSize"], 200);
}

#[tokio::test]
async fn rejected_grant_carries_raw_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/oauth2/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_client_id",
            "error_description": "client identifier invalid"
        })))
        .mount(&server)
        .await;

    let auth = PasswordFlowAuth::new().unwrap().with_login_url(server.uri());
    let err = auth
        .authenticate(&common::credentials())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("invalid_client_id"));
    assert!(err.raw_response().unwrap().contains("client identifier invalid"));
}

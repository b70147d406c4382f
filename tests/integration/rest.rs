//! REST operation facade against a mocked org instance.

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common;

#[tokio::test]
async fn versions_hits_the_unversioned_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"label": "Summer '14", "url": "/services/data/v31.0", "version": "31.0"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client.versions().await.unwrap();

    let body = response.json_value().unwrap();
    assert_eq!(body[0]["version"], "31.0");
}

#[tokio::test]
async fn discovery_operations_resolve_versioned_paths() {
    let server = MockServer::start().await;

    for p in [
        "/services/data/v31.0/",
        "/services/data/v31.0/limits/",
        "/services/data/v31.0/sobjects/",
        "/services/data/v31.0/sobjects/Account/",
        "/services/data/v31.0/sobjects/Account/describe/",
    ] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = common::rest_client(&server);
    client.resources().await.unwrap();
    client.limits().await.unwrap();
    client.sobjects().await.unwrap();
    client.sobject_metadata("Account").await.unwrap();
    client.describe("Account").await.unwrap();
}

#[tokio::test]
async fn create_sends_json_body_with_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/data/v31.0/sobjects/Account/"))
        .and(header("Content-Type", "application/json"))
        .and(header(
            "Authorization",
            format!("Bearer {}", common::ACCESS_TOKEN).as_str(),
        ))
        .and(body_string(r#"{"Name":"Acme"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "001D000000IqhSLIAZ",
            "errors": [],
            "success": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client.create("Account", &json!({"Name": "Acme"})).await.unwrap();

    assert_eq!(response.status(), 201);
    assert_eq!(response.json_value().unwrap()["id"], "001D000000IqhSLIAZ");
}

#[tokio::test]
async fn update_and_delete_pass_through_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/services/data/v31.0/sobjects/Account/001D000000IqhSL"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"Name":"Updated"}"#))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/services/data/v31.0/sobjects/Account/001D000000IqhSL"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);

    let updated = client
        .update("Account", "001D000000IqhSL", &json!({"Name": "Updated"}))
        .await
        .unwrap();
    assert_eq!(updated.status(), 204);
    assert_eq!(updated.json_value().unwrap(), serde_json::Value::Null);

    let deleted = client.delete("Account", "001D000000IqhSL").await.unwrap();
    assert_eq!(deleted.status(), 204);
}

#[tokio::test]
async fn record_fields_sends_comma_joined_field_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v31.0/sobjects/Contact/003xx"))
        .and(query_param("fields", "Name,Email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Name": "Ada", "Email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client
        .record_fields("Contact", "003xx", &["Name", "Email"])
        .await
        .unwrap();

    assert_eq!(response.json_value().unwrap()["Name"], "Ada");
}

#[tokio::test]
async fn query_replaces_spaces_with_plus() {
    let server = MockServer::start().await;

    // "+" in a query string decodes to a space server-side
    Mock::given(method("GET"))
        .and(path("/services/data/v31.0/query"))
        .and(query_param("q", "SELECT Id FROM Account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalSize": 0, "done": true, "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client.query("SELECT Id FROM Account").await.unwrap();

    assert_eq!(response.json_value().unwrap()["done"], true);
}

#[tokio::test]
async fn search_url_encodes_the_sosl() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v31.0/search"))
        .and(query_param("q", "FIND {Acme}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client.search("FIND {Acme}").await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn upsert_passes_through_multiple_choice() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(
            "/services/data/v31.0/sobjects/Account/Acme_Id__c/A-17",
        ))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(300).set_body_json(json!([
            "/services/data/v31.0/sobjects/Account/001D000000IqhSL",
            "/services/data/v31.0/sobjects/Account/001D000000IqhSM"
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client
        .upsert("Account", "Acme_Id__c", "A-17", &json!({"Name": "Acme"}))
        .await
        .unwrap();

    // Ambiguous external-id match is the caller's problem, not an error
    assert_eq!(response.status(), 300);
    assert!(response.json_value().unwrap().is_array());
}

#[tokio::test]
async fn remote_api_errors_are_returned_not_raised() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v31.0/query"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!([{
            "message": "unexpected token: FRM",
            "errorCode": "MALFORMED_QUERY"
        }])))
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    let response = client.query("SELECT Id FRM Account").await.unwrap();

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.json_value().unwrap()[0]["errorCode"],
        "MALFORMED_QUERY"
    );
}

#[tokio::test]
async fn api_version_rebind_changes_subsequent_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/data/v31.0/limits/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/services/data/v36.0/limits/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::rest_client(&server);
    client.limits().await.unwrap();

    let client = client.with_api_version("36.0");
    client.limits().await.unwrap();
}

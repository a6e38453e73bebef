//! Tests for the HttpContactLookup service

use serde_json::json;
use shared::{CompanyId, ContactRecord};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::EndpointTemplate;
use crate::error::AutofillError;
use crate::services::HttpContactLookup;
use crate::traits::ContactLookup;

fn lookup_for(server: &MockServer) -> HttpContactLookup {
    let endpoint =
        EndpointTemplate::parse(&format!("{}/companies/ajax-primary/0/", server.uri())).unwrap();
    HttpContactLookup::new(Some(endpoint))
}

fn company(id: &str) -> CompanyId {
    CompanyId::parse(id).unwrap()
}

#[tokio::test]
async fn test_successful_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/ajax-primary/42/"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "Acme Inc", "email": "Ops@Acme.example"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let lookup = lookup_for(&server);
    let record = lookup.primary_contact(&company("42")).await;

    assert_eq!(record, Some(ContactRecord::new("Acme Inc", "Ops@Acme.example")));
}

#[tokio::test]
async fn test_partial_body_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/ajax-primary/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": "a@b.example"})))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server);
    let record = lookup.primary_contact(&company("5")).await.unwrap();

    assert_eq!(record.name, None);
    assert_eq!(record.email.as_deref(), Some("a@b.example"));
}

#[tokio::test]
async fn test_error_status_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server);
    assert_eq!(lookup.primary_contact(&company("1")).await, None);
    assert!(matches!(
        lookup.fetch(&company("1")).await,
        Err(AutofillError::HttpStatus { status: 404 })
    ));
}

#[tokio::test]
async fn test_malformed_body_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server);
    assert_eq!(lookup.primary_contact(&company("1")).await, None);
    assert!(matches!(
        lookup.fetch(&company("1")).await,
        Err(AutofillError::MalformedBody { .. })
    ));
}

#[tokio::test]
async fn test_non_object_body_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Acme Inc"])))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server);
    assert_eq!(lookup.primary_contact(&company("1")).await, None);
}

#[tokio::test]
async fn test_wrongly_typed_field_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": 17})))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server);
    assert_eq!(lookup.primary_contact(&company("1")).await, None);
}

#[tokio::test]
async fn test_server_gone_yields_none() {
    let server = MockServer::start().await;
    let lookup = lookup_for(&server);
    drop(server);

    assert_eq!(lookup.primary_contact(&company("1")).await, None);
}

#[tokio::test]
async fn test_missing_endpoint_yields_none() {
    let lookup = HttpContactLookup::new(None);
    assert_eq!(lookup.primary_contact(&company("1")).await, None);
    assert!(matches!(
        lookup.fetch(&company("1")).await,
        Err(AutofillError::NotConfigured)
    ));
}

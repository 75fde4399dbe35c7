// Contract tests for the customer endpoints: local validation gates the
// HTTP call, and the group-membership listing parses as returned.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ledgerline::config::{CredentialStore, TOKEN_KEY};
use ledgerline::core::AppError;
use ledgerline::customers::models::Customer;
use ledgerline::customers::services::CustomerApi;

fn store_with_token() -> CredentialStore {
    let store = CredentialStore::new();
    store.set(TOKEN_KEY, "test-token");
    store
}

fn valid_customer() -> Customer {
    Customer {
        name: "Acme Traders".to_string(),
        phone: "9876543210".to_string(),
        email: "accounts@acme.example".to_string(),
        address: "14 Market Road".to_string(),
        ..Customer::default()
    }
}

#[tokio::test]
async fn test_create_customer_posts_record() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Customer/create-customer"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 31,
            "name": "Acme Traders"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = CustomerApi::new(server.uri(), store_with_token());
    let record = api.create_customer(&valid_customer()).await.unwrap();

    assert_eq!(record.id, 31);
}

#[tokio::test]
async fn test_invalid_customer_never_reaches_backend() {
    let server = MockServer::start().await;

    let mut customer = valid_customer();
    customer.email = "not-an-email".to_string();

    let api = CustomerApi::new(server.uri(), store_with_token());
    let err = api.create_customer(&customer).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_group_members_listing_parses() -> anyhow::Result<()> {
    ledgerline::config::init_tracing(&ledgerline::config::AppConfig {
        env: "test".to_string(),
        log_level: "debug".to_string(),
    });

    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Customer/get-customer-group-members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "customerGroupMemberId": 4,
                "customerName": "Acme Traders",
                "customerGroupName": "Wholesale",
                "role": "member",
                "isActive": true
            }
        ])))
        .mount(&server)
        .await;

    let api = CustomerApi::new(server.uri(), store_with_token());
    let members = api.get_customer_group_members().await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].customer_group_name, "Wholesale");
    assert!(members[0].is_active);
    Ok(())
}

#[tokio::test]
async fn test_backend_error_message_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Customer/create-customer"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "phone number already registered"
        })))
        .mount(&server)
        .await;

    let api = CustomerApi::new(server.uri(), store_with_token());
    let err = api.create_customer(&valid_customer()).await.unwrap_err();

    assert!(err.to_string().contains("phone number already registered"));
}

// Contract tests for the voucher endpoints: bearer-token attachment,
// payload shape, and error-message surfacing, against a mock backend.

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ledgerline::config::{CredentialStore, TOKEN_KEY};
use ledgerline::core::AppError;
use ledgerline::vouchers::models::{Entry, EntryType, VoucherDraft, VoucherType};
use ledgerline::vouchers::services::{voucher_payload, VoucherApi, VoucherBackend};

fn store_with_token() -> CredentialStore {
    let store = CredentialStore::new();
    store.set(TOKEN_KEY, "test-token");
    store
}

fn receipt_payload() -> ledgerline::vouchers::services::VoucherPayload {
    let mut draft = VoucherDraft::template(VoucherType::Receipt);
    draft.voucher_number = "RV-100".to_string();
    draft.set_entries(vec![
        Entry::new(5, EntryType::Debit, dec!(300)).unwrap(),
        Entry::new(6, EntryType::Credit, dec!(300)).unwrap(),
    ]);
    voucher_payload(&draft)
}

#[tokio::test]
async fn test_submit_attaches_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vouchers/receipt"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 17,
            "voucherNumber": "RV-100",
            "grandTotal": "0"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = VoucherApi::new(server.uri(), store_with_token());
    let record = api.submit_voucher(&receipt_payload()).await.unwrap();

    assert_eq!(record.id, 17);
    assert_eq!(record.voucher_number, "RV-100");
}

#[tokio::test]
async fn test_submit_sends_expected_wire_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vouchers/receipt"))
        .and(body_partial_json(json!({
            "voucherNumber": "RV-100",
            "voucherType": "receipt",
            "entries": [
                {"ledgerId": 5, "entryType": 1, "amount": "300"},
                {"ledgerId": 6, "entryType": 0, "amount": "300"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "voucherNumber": "RV-100"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = VoucherApi::new(server.uri(), store_with_token());
    api.submit_voucher(&receipt_payload()).await.unwrap();
}

#[tokio::test]
async fn test_server_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vouchers/receipt"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "duplicate voucher number"
        })))
        .mount(&server)
        .await;

    let api = VoucherApi::new(server.uri(), store_with_token());
    let err = api.submit_voucher(&receipt_payload()).await.unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
    assert!(err.to_string().contains("duplicate voucher number"));
}

#[tokio::test]
async fn test_unparseable_error_body_gets_fallback_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vouchers/receipt"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let api = VoucherApi::new(server.uri(), store_with_token());
    let err = api.submit_voucher(&receipt_payload()).await.unwrap_err();

    assert!(err.to_string().contains("HTTP 500"));
}

#[tokio::test]
async fn test_auth_failure_maps_to_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vouchers/receipt"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "token expired"
        })))
        .mount(&server)
        .await;

    let api = VoucherApi::new(server.uri(), store_with_token());
    let err = api.submit_voucher(&receipt_payload()).await.unwrap_err();

    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn test_missing_token_blocks_before_any_request() {
    let server = MockServer::start().await;
    // no mocks mounted: a request would 404 — none must be made

    let api = VoucherApi::new(server.uri(), CredentialStore::new());
    let err = api.submit_voucher(&receipt_payload()).await.unwrap_err();

    assert!(matches!(err, AppError::Unauthorized(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_vouchers_parses_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vouchers/receipt"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "voucherNumber": "RV-1", "grandTotal": "118"},
            {"id": 2, "voucherNumber": "RV-2", "grandTotal": null}
        ])))
        .mount(&server)
        .await;

    let api = VoucherApi::new(server.uri(), store_with_token());
    let records = api.list_vouchers().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].grand_total, Some(dec!(118)));
    assert!(records[1].grand_total.is_none());
}

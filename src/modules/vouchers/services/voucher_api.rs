use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::submission::VoucherPayload;
use crate::config::CredentialStore;
use crate::core::{http, Result};

/// Backend acknowledgement for a stored voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherRecord {
    pub id: i64,
    #[serde(rename = "voucherNumber")]
    pub voucher_number: String,
    #[serde(rename = "grandTotal")]
    pub grand_total: Option<Decimal>,
}

/// Seam over voucher persistence so the draft lifecycle can be exercised
/// without a network.
#[async_trait]
pub trait VoucherBackend: Send + Sync {
    /// Persist one voucher. Exactly one call per submission; no retry.
    async fn submit_voucher(&self, payload: &VoucherPayload) -> Result<VoucherRecord>;
}

/// HTTP client for the voucher endpoints.
pub struct VoucherApi {
    client: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl VoucherApi {
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Fetch all stored receipt vouchers.
    pub async fn list_vouchers(&self) -> Result<Vec<VoucherRecord>> {
        let url = format!("{}/vouchers/receipt", self.base_url);
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("voucher listing", response).await);
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl VoucherBackend for VoucherApi {
    async fn submit_voucher(&self, payload: &VoucherPayload) -> Result<VoucherRecord> {
        let url = format!("{}/vouchers/receipt", self.base_url);
        let token = self.credentials.bearer_token()?;

        tracing::info!(
            voucher_number = %payload.voucher_number,
            voucher_type = %payload.voucher_type,
            grand_total = %payload.grand_total,
            "submitting voucher"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("voucher submission", response).await);
        }

        Ok(response.json().await?)
    }
}

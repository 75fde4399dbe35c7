use reqwest::Client;

use super::submission::{DeliveryOrderPayload, PurchaseOrderPayload};
use crate::config::CredentialStore;
use crate::core::{http, Result};
use crate::modules::orders::models::{GoodsReceiptNote, OrderRecord, SalesDocumentKind};

fn sales_document_path(kind: SalesDocumentKind) -> &'static str {
    match kind {
        SalesDocumentKind::DeliveryOrder => "/Product/DeliveryOrders",
        SalesDocumentKind::SalesOrder => "/Product/SalesOrders",
        SalesDocumentKind::QuotationSale => "/Product/QuotationSale",
        SalesDocumentKind::QuotationRental => "/Product/QuotationRental",
    }
}

/// HTTP client for the order-document endpoints.
pub struct OrderApi {
    client: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl OrderApi {
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Store one purchase order.
    pub async fn create_purchase_order(
        &self,
        payload: &PurchaseOrderPayload,
    ) -> Result<OrderRecord> {
        let url = format!("{}/Product/purchase-orders", self.base_url);
        let token = self.credentials.bearer_token()?;

        tracing::info!(
            vendor_id = payload.vendor_id,
            grand_total = %payload.grand_total,
            "submitting purchase order"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("purchase order creation", response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch all stored purchase orders.
    pub async fn list_purchase_orders(&self) -> Result<Vec<OrderRecord>> {
        let url = format!("{}/Product/purchase-orders", self.base_url);
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("purchase order listing", response).await);
        }

        Ok(response.json().await?)
    }

    /// Store one customer-facing order document (delivery order, sales
    /// order, or quotation — the endpoint follows the document kind).
    pub async fn create_sales_document(
        &self,
        kind: SalesDocumentKind,
        payload: &DeliveryOrderPayload,
    ) -> Result<OrderRecord> {
        let url = format!("{}{}", self.base_url, sales_document_path(kind));
        let token = self.credentials.bearer_token()?;

        tracing::info!(
            %kind,
            customer_id = payload.customer_id,
            grand_total = %payload.grand_total,
            "submitting order document"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("order document creation", response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch all recorded goods receipt notes.
    pub async fn list_goods_receipt_notes(&self) -> Result<Vec<GoodsReceiptNote>> {
        let url = format!("{}/Product/GoodsReceiptNotes", self.base_url);
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("goods receipt note listing", response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch all stored documents of one kind.
    pub async fn list_sales_documents(
        &self,
        kind: SalesDocumentKind,
    ) -> Result<Vec<OrderRecord>> {
        let url = format!("{}{}", self.base_url, sales_document_path(kind));
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("order document listing", response).await);
        }

        Ok(response.json().await?)
    }
}

use reqwest::Client;

use crate::config::CredentialStore;
use crate::core::{http, Result};
use crate::modules::inventory::models::{
    CatalogEntry, CatalogKind, CatalogRecord, ItemMaster, ItemRecord,
};

fn catalog_path(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Category => "/Product/categories",
        CatalogKind::SubCategory => "/Product/subcategories",
        CatalogKind::Unit => "/Product/units",
        CatalogKind::Group => "/Product/groups",
        CatalogKind::SubGroup => "/Product/subgroups",
    }
}

/// HTTP client for the inventory catalog endpoints.
pub struct CatalogApi {
    client: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl CatalogApi {
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Create one simple catalog entity (category, unit, group, ...).
    pub async fn create_entry(
        &self,
        kind: CatalogKind,
        entry: &CatalogEntry,
    ) -> Result<CatalogRecord> {
        entry.validate()?;

        let url = format!("{}{}", self.base_url, catalog_path(kind));
        let token = self.credentials.bearer_token()?;

        tracing::info!(%kind, name = %entry.name, "creating catalog entry");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(entry)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("catalog entry creation", response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch every entity of one catalog family.
    pub async fn list_entries(&self, kind: CatalogKind) -> Result<Vec<CatalogRecord>> {
        let url = format!("{}{}", self.base_url, catalog_path(kind));
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("catalog listing", response).await);
        }

        Ok(response.json().await?)
    }

    /// Create one item master record.
    pub async fn create_item(&self, item: &ItemMaster) -> Result<ItemRecord> {
        item.validate()?;

        let url = format!("{}/Product/items", self.base_url);
        let token = self.credentials.bearer_token()?;

        tracing::info!(name = %item.name, "creating item master");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(item)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("item creation", response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch the full item catalog.
    pub async fn list_items(&self) -> Result<Vec<ItemRecord>> {
        let url = format!("{}/Product/items", self.base_url);
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("item listing", response).await);
        }

        Ok(response.json().await?)
    }
}

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::CredentialStore;
use crate::core::{http, Result};
use crate::modules::customers::models::{Customer, CustomerGroupMember};

/// Backend acknowledgement for a created customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
}

/// HTTP client for the customer endpoints.
pub struct CustomerApi {
    client: Client,
    base_url: String,
    credentials: CredentialStore,
}

impl CustomerApi {
    pub fn new(base_url: impl Into<String>, credentials: CredentialStore) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Create one customer. Validation runs first; a rejected record never
    /// leaves the client.
    pub async fn create_customer(&self, customer: &Customer) -> Result<CustomerRecord> {
        customer.validate()?;

        let url = format!("{}/Customer/create-customer", self.base_url);
        let token = self.credentials.bearer_token()?;

        tracing::info!(name = %customer.name, "creating customer");

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(customer)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("customer creation", response).await);
        }

        Ok(response.json().await?)
    }

    /// Fetch the customer-group membership listing.
    pub async fn get_customer_group_members(&self) -> Result<Vec<CustomerGroupMember>> {
        let url = format!("{}/Customer/get-customer-group-members", self.base_url);
        let token = self.credentials.bearer_token()?;

        let response = self.client.get(&url).bearer_auth(token).send().await?;

        if !response.status().is_success() {
            return Err(http::error_from_response("customer group listing", response).await);
        }

        Ok(response.json().await?)
    }
}

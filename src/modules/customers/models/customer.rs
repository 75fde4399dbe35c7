// Customer master record as submitted to the backend, plus the group
// membership listing DTO. Validation here is the client-side required-
// field gate; anything deeper is the backend's problem.

use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Full customer record for creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,

    /// Tax registration identifier (GSTIN)
    #[serde(default)]
    pub gstin: String,

    /// Income-tax identifier (PAN)
    #[serde(default)]
    pub pan: String,

    #[serde(default, rename = "bankName")]
    pub bank_name: String,

    #[serde(default, rename = "bankAccountNumber")]
    pub bank_account_number: String,

    #[serde(default, rename = "ifscCode")]
    pub ifsc_code: String,
}

impl Customer {
    /// Required-field and email-shape checks run before submission is
    /// attempted. Failures are surfaced locally; no HTTP call is made.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Customer name is required"));
        }
        if self.phone.trim().is_empty() {
            return Err(AppError::validation("Phone number is required"));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if self.address.trim().is_empty() {
            return Err(AppError::validation("Address is required"));
        }
        if !looks_like_email(&self.email) {
            return Err(AppError::validation(format!(
                "Malformed email address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Minimal local@domain.tld shape check — intentionally not RFC-complete.
fn looks_like_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !candidate.contains(char::is_whitespace)
}

/// One row from the customer-group membership listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerGroupMember {
    #[serde(rename = "customerGroupMemberId")]
    pub customer_group_member_id: i64,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerGroupName")]
    pub customer_group_name: String,
    pub role: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

// Read-side DTOs for order documents as the backend returns them.
// Display-level only: id, party, status, and monetary totals — no local
// invariants are enforced on fetched records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::other_cost::OtherCost;
use super::status::ApprovalStatus;

/// One stored order document in a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    #[serde(rename = "partyName")]
    pub party_name: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(rename = "grandTotal")]
    pub grand_total: Option<Decimal>,
}

/// A goods receipt note recorded against a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoodsReceiptNote {
    pub id: i64,
    #[serde(rename = "grnNumber")]
    pub grn_number: String,
    #[serde(rename = "purchaseOrderId")]
    pub purchase_order_id: i64,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default, rename = "otherCosts")]
    pub other_costs: Vec<OtherCost>,
    #[serde(rename = "grandTotal")]
    pub grand_total: Option<Decimal>,
}

// Maps the in-memory draft to the wire shape the backend expects: numeric
// entry-type codes chosen per voucher type, derived totals materialized,
// and the plain date expanded to a midnight-UTC timestamp string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::voucher_totals;
use crate::modules::vouchers::models::{VoucherDraft, VoucherType};

/// One posting line on the wire. `entry_type` is the backend's numeric
/// code, which differs per voucher family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPayload {
    #[serde(rename = "ledgerId")]
    pub ledger_id: i64,
    #[serde(rename = "entryType")]
    pub entry_type: u8,
    pub amount: Decimal,
}

/// One line item on the wire, with its derived figures materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(rename = "itemId")]
    pub item_id: i64,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    #[serde(rename = "cgstPercent")]
    pub cgst_percent: Decimal,
    #[serde(rename = "sgstPercent")]
    pub sgst_percent: Decimal,
    #[serde(rename = "igstPercent")]
    pub igst_percent: Decimal,
    #[serde(rename = "taxAmount")]
    pub tax_amount: Decimal,
}

/// Full voucher submission body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherPayload {
    #[serde(rename = "companyId")]
    pub company_id: i64,
    #[serde(rename = "voucherNumber")]
    pub voucher_number: String,
    #[serde(rename = "voucherType")]
    pub voucher_type: VoucherType,
    /// Full timestamp string (midnight UTC of the voucher date)
    pub date: String,
    pub narration: String,
    pub entries: Vec<EntryPayload>,
    pub items: Vec<ItemPayload>,
    pub subtotal: Decimal,
    #[serde(rename = "totalGstAmount")]
    pub total_gst_amount: Decimal,
    pub discount: Decimal,
    #[serde(rename = "freightCharges")]
    pub freight_charges: Decimal,
    #[serde(rename = "grandTotal")]
    pub grand_total: Decimal,
    #[serde(rename = "netAmount")]
    pub net_amount: Decimal,
    #[serde(rename = "dispatchedThrough", skip_serializing_if = "Option::is_none")]
    pub dispatched_through: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(rename = "vehicleNumber", skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
}

fn entry_code(voucher_type: VoucherType, entry: &crate::modules::vouchers::models::Entry) -> u8 {
    use crate::modules::vouchers::models::EntryType;
    match entry.entry_type {
        EntryType::Debit => voucher_type.debit_code(),
        EntryType::Credit => voucher_type.credit_code(),
    }
}

/// Build the wire payload for a draft. Pure; exactly one HTTP call per
/// submission happens elsewhere, in the API client.
pub fn voucher_payload(draft: &VoucherDraft) -> VoucherPayload {
    let freight = draft
        .dispatch
        .as_ref()
        .map(|d| d.freight_charges)
        .unwrap_or(Decimal::ZERO);
    let totals = voucher_totals(&draft.items, draft.discount, freight);

    let entries = draft
        .entries
        .iter()
        .map(|entry| EntryPayload {
            ledger_id: entry.ledger_id,
            entry_type: entry_code(draft.voucher_type, entry),
            amount: entry.amount,
        })
        .collect();

    let items = draft
        .items
        .iter()
        .map(|item| ItemPayload {
            item_id: item.item_id,
            quantity: item.quantity,
            rate: item.rate,
            amount: item.amount(),
            cgst_percent: item.gst.cgst_percent,
            sgst_percent: item.gst.sgst_percent,
            igst_percent: item.gst.igst_percent,
            tax_amount: item.tax_amount(),
        })
        .collect();

    tracing::debug!(
        voucher_type = %draft.voucher_type,
        entries = draft.entries.len(),
        items = draft.items.len(),
        grand_total = %totals.grand_total,
        "built voucher payload"
    );

    VoucherPayload {
        company_id: draft.company_id,
        voucher_number: draft.voucher_number.clone(),
        voucher_type: draft.voucher_type,
        date: format!("{}T00:00:00Z", draft.date),
        narration: draft.narration.clone(),
        entries,
        items,
        subtotal: totals.subtotal,
        total_gst_amount: totals.total_tax,
        discount: draft.discount,
        freight_charges: freight,
        grand_total: totals.grand_total,
        net_amount: totals.net_amount,
        dispatched_through: draft.dispatch.as_ref().map(|d| d.dispatched_through.clone()),
        destination: draft.dispatch.as_ref().map(|d| d.destination.clone()),
        vehicle_number: draft.dispatch.as_ref().map(|d| d.vehicle_number.clone()),
    }
}

// Wire payload builders for order documents. Same defensive posture as
// the voucher adapter: derived figures are materialized at build time and
// dates expand to full midnight-UTC timestamp strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::totals::{delivery_order_totals, purchase_order_totals};
use crate::core::{AppError, Result};
use crate::modules::orders::models::{DeliveryOrderDraft, OtherCost, PurchaseOrderDraft};
use crate::modules::vouchers::models::LineItem;
use crate::modules::vouchers::services::ItemPayload;

/// Other cost on the wire, conversion materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherCostPayload {
    pub name: String,
    pub amount: Decimal,
    pub currency: String,
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Decimal,
    #[serde(rename = "convertedAmount")]
    pub converted_amount: Decimal,
}

impl From<&OtherCost> for OtherCostPayload {
    fn from(cost: &OtherCost) -> Self {
        Self {
            name: cost.name.clone(),
            amount: cost.amount,
            currency: cost.currency.clone(),
            exchange_rate: cost.exchange_rate,
            converted_amount: cost.converted_amount(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderPayload {
    #[serde(rename = "vendorId")]
    pub vendor_id: i64,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    pub date: String,
    pub items: Vec<ItemPayload>,
    #[serde(rename = "otherCosts")]
    pub other_costs: Vec<OtherCostPayload>,
    pub subtotal: Decimal,
    #[serde(rename = "totalGstAmount")]
    pub total_gst_amount: Decimal,
    pub discount: Decimal,
    #[serde(rename = "grandTotal")]
    pub grand_total: Decimal,
    #[serde(rename = "netAmount")]
    pub net_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrderPayload {
    #[serde(rename = "customerId")]
    pub customer_id: i64,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
    pub date: String,
    pub items: Vec<ItemPayload>,
    #[serde(rename = "discountPercent")]
    pub discount_percent: Decimal,
    pub subtotal: Decimal,
    #[serde(rename = "totalGstAmount")]
    pub total_gst_amount: Decimal,
    #[serde(rename = "discountAmount")]
    pub discount_amount: Decimal,
    #[serde(rename = "netAmount")]
    pub net_amount: Decimal,
    #[serde(rename = "grandTotal")]
    pub grand_total: Decimal,
}

fn timestamp(date: Option<NaiveDate>, field: &str) -> Result<String> {
    let date = date.ok_or_else(|| AppError::validation(format!("{} is required", field)))?;
    Ok(format!("{}T00:00:00Z", date))
}

fn item_payloads(items: &[LineItem]) -> Vec<ItemPayload> {
    items
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
        .collect()
}

/// Build the wire payload for a purchase-order draft.
pub fn purchase_order_payload(draft: &PurchaseOrderDraft) -> Result<PurchaseOrderPayload> {
    draft.validate_for_submit()?;
    let totals = purchase_order_totals(&draft.items, &draft.other_costs, draft.discount);

    Ok(PurchaseOrderPayload {
        vendor_id: draft.vendor_id,
        order_number: draft.order_number.clone(),
        date: timestamp(draft.date, "Order date")?,
        items: item_payloads(&draft.items),
        other_costs: draft.other_costs.iter().map(OtherCostPayload::from).collect(),
        subtotal: totals.subtotal,
        total_gst_amount: totals.total_tax,
        discount: draft.discount,
        grand_total: totals.grand_total,
        net_amount: totals.net_amount,
    })
}

/// Build the wire payload for a delivery-order-shaped draft.
pub fn delivery_order_payload(draft: &DeliveryOrderDraft) -> Result<DeliveryOrderPayload> {
    draft.validate_for_submit()?;
    let totals = delivery_order_totals(&draft.items, draft.discount_percent);

    Ok(DeliveryOrderPayload {
        customer_id: draft.customer_id,
        order_number: draft.order_number.clone(),
        date: timestamp(draft.date, "Order date")?,
        items: item_payloads(&draft.items),
        discount_percent: draft.discount_percent,
        subtotal: totals.subtotal,
        total_gst_amount: totals.total_tax,
        discount_amount: totals.discount_amount,
        net_amount: totals.net_amount,
        grand_total: totals.grand_total,
    })
}

// Draft of a purchase order as composed on the purchase-order page:
// vendor, date, line items, foreign-currency other costs, and a flat
// discount. Totals are derived in the orders totals service.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::other_cost::OtherCost;
use crate::core::{AppError, Result};
use crate::modules::vouchers::models::LineItem;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderDraft {
    /// Supplier reference; 0 = unset
    #[serde(rename = "vendorId")]
    pub vendor_id: i64,

    #[serde(rename = "orderNumber")]
    pub order_number: String,

    pub date: Option<NaiveDate>,

    pub items: Vec<LineItem>,

    #[serde(rename = "otherCosts")]
    pub other_costs: Vec<OtherCost>,

    /// Flat discount subtracted from the grand total
    pub discount: Decimal,
}

impl PurchaseOrderDraft {
    pub fn new(vendor_id: i64, date: NaiveDate) -> Self {
        Self {
            vendor_id,
            date: Some(date),
            items: vec![LineItem::blank()],
            ..Self::default()
        }
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn update_item(&mut self, index: usize, item: LineItem) -> Result<()> {
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| AppError::validation(format!("no line item at index {}", index)))?;
        *slot = item;
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(AppError::validation(format!(
                "no line item at index {}",
                index
            )));
        }
        self.items.remove(index);
        Ok(())
    }

    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    pub fn add_other_cost(&mut self, cost: OtherCost) {
        self.other_costs.push(cost);
    }

    pub fn remove_other_cost(&mut self, index: usize) -> Result<()> {
        if index >= self.other_costs.len() {
            return Err(AppError::validation(format!(
                "no other cost at index {}",
                index
            )));
        }
        self.other_costs.remove(index);
        Ok(())
    }

    /// Required-field checks run just before submission.
    pub fn validate_for_submit(&self) -> Result<()> {
        if self.vendor_id == 0 {
            return Err(AppError::validation("Vendor is required"));
        }
        if self.date.is_none() {
            return Err(AppError::validation("Order date is required"));
        }
        Ok(())
    }
}

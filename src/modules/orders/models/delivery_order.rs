// Draft of a delivery order (and the quotation variants, which share its
// shape): customer, date, line items and a percentage discount — the
// discount semantics deliberately differ from purchase orders.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};
use crate::modules::vouchers::models::LineItem;

/// Which customer-facing document family a draft belongs to. Each kind
/// posts to its own backend endpoint but shares the delivery-order shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesDocumentKind {
    DeliveryOrder,
    SalesOrder,
    QuotationSale,
    QuotationRental,
}

impl std::fmt::Display for SalesDocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SalesDocumentKind::DeliveryOrder => write!(f, "delivery_order"),
            SalesDocumentKind::SalesOrder => write!(f, "sales_order"),
            SalesDocumentKind::QuotationSale => write!(f, "quotation_sale"),
            SalesDocumentKind::QuotationRental => write!(f, "quotation_rental"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryOrderDraft {
    pub kind: SalesDocumentKind,

    /// Customer reference; 0 = unset
    #[serde(rename = "customerId")]
    pub customer_id: i64,

    #[serde(rename = "orderNumber")]
    pub order_number: String,

    pub date: Option<NaiveDate>,

    pub items: Vec<LineItem>,

    /// Percentage discount applied to the subtotal
    #[serde(rename = "discountPercent")]
    pub discount_percent: Decimal,
}

impl DeliveryOrderDraft {
    pub fn new(kind: SalesDocumentKind, customer_id: i64, date: NaiveDate) -> Self {
        Self {
            kind,
            customer_id,
            order_number: String::new(),
            date: Some(date),
            items: vec![LineItem::blank()],
            discount_percent: Decimal::ZERO,
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

    /// Required-field checks run just before submission.
    pub fn validate_for_submit(&self) -> Result<()> {
        if self.customer_id == 0 {
            return Err(AppError::validation("Customer is required"));
        }
        if self.date.is_none() {
            return Err(AppError::validation("Order date is required"));
        }
        Ok(())
    }
}

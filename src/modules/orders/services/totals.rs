// Derived totals for order documents. Two named computations that must
// stay separate: the delivery-order flow takes a percentage discount off
// the subtotal before tax is added, the purchase-order flow folds other
// costs into the subtotal and takes a flat discount off the grand total.
// Both are pure and recompute everything from scratch.

use rust_decimal::Decimal;

use crate::core::numeric::percent_of;
use crate::modules::orders::models::OtherCost;
use crate::modules::vouchers::models::LineItem;

/// Derived set shared by both order-document flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    pub discount_amount: Decimal,
    pub net_amount: Decimal,
    pub grand_total: Decimal,
}

/// Delivery-order (and quotation/sales-order) totals.
///
/// `discount_percent` is taken off the subtotal, then tax is added on top
/// of the discounted net:
/// `net = subtotal − subtotal·d%`, `grand = net + tax`.
pub fn delivery_order_totals(items: &[LineItem], discount_percent: Decimal) -> OrderTotals {
    let subtotal: Decimal = items.iter().map(LineItem::amount).sum();
    let total_tax: Decimal = items.iter().map(LineItem::tax_amount).sum();
    let discount_amount = percent_of(subtotal, discount_percent);
    let net_amount = subtotal - discount_amount;
    let grand_total = net_amount + total_tax;

    OrderTotals {
        subtotal,
        total_tax,
        discount_amount,
        net_amount,
        grand_total,
    }
}

/// Purchase-order (and goods-receipt-note) totals.
///
/// Converted other costs join the subtotal, the flat `discount` comes off
/// at the end: `grand = subtotal + tax`, `net = grand − discount`.
pub fn purchase_order_totals(
    items: &[LineItem],
    other_costs: &[OtherCost],
    discount: Decimal,
) -> OrderTotals {
    let item_total: Decimal = items.iter().map(LineItem::amount).sum();
    let cost_total: Decimal = other_costs.iter().map(OtherCost::converted_amount).sum();
    let subtotal = item_total + cost_total;
    let total_tax: Decimal = items.iter().map(LineItem::tax_amount).sum();
    let grand_total = subtotal + total_tax;
    let net_amount = grand_total - discount;

    OrderTotals {
        subtotal,
        total_tax,
        discount_amount: discount,
        net_amount,
        grand_total,
    }
}

// Derived totals for a voucher draft. Pure functions of the inputs,
// recomputed from scratch on every call — item lists are tens of rows at
// most, so there is no incremental update path.

use rust_decimal::Decimal;

use crate::modules::vouchers::models::LineItem;

/// The full derived set for a voucher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoucherTotals {
    /// Σ quantity × rate over all line items
    pub subtotal: Decimal,
    /// Σ per-line tax (combined GST rate applied to the line amount)
    pub total_tax: Decimal,
    /// subtotal + tax + freight
    pub grand_total: Decimal,
    /// grand total less the flat discount
    pub net_amount: Decimal,
}

/// Compute the derived totals for a voucher draft.
///
/// Voucher flows use a flat discount subtracted from the grand total;
/// this intentionally differs from the percentage discount used by
/// delivery orders (see the orders module).
pub fn voucher_totals(items: &[LineItem], discount: Decimal, freight: Decimal) -> VoucherTotals {
    let subtotal: Decimal = items.iter().map(LineItem::amount).sum();
    let total_tax: Decimal = items.iter().map(LineItem::tax_amount).sum();
    let grand_total = subtotal + total_tax + freight;
    let net_amount = grand_total - discount;

    VoucherTotals {
        subtotal,
        total_tax,
        grand_total,
        net_amount,
    }
}

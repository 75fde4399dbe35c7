// Property-based tests for the voucher totals computation.
//
// The computation is a pure function of the item list and the scalar
// discount/freight inputs: identical inputs must always yield identical
// derived totals, and the documented fixed vectors must hold exactly.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ledgerline::vouchers::models::{GstRate, LineItem};
use ledgerline::vouchers::services::voucher_totals;

fn item(qty: u64, rate: u64, cgst: u8, sgst: u8, igst: u8) -> LineItem {
    LineItem::new(
        1,
        Decimal::from(qty),
        Decimal::from(rate),
        GstRate::new(
            Decimal::from(cgst),
            Decimal::from(sgst),
            Decimal::from(igst),
        ),
    )
    .unwrap()
}

#[test]
fn test_domestic_split_vector() {
    let items = vec![item(2, 50, 9, 9, 0)];
    let totals = voucher_totals(&items, dec!(0), dec!(0));

    assert_eq!(totals.subtotal, dec!(100));
    assert_eq!(totals.total_tax, dec!(18));
    assert_eq!(totals.grand_total, dec!(118));
}

#[test]
fn test_cross_border_vector() {
    let items = vec![item(1, 1200, 0, 0, 18)];
    let totals = voucher_totals(&items, dec!(0), dec!(0));

    assert_eq!(totals.subtotal, dec!(1200));
    assert_eq!(totals.total_tax, dec!(216));
    assert_eq!(totals.grand_total, dec!(1416));
}

proptest! {
    #[test]
    fn test_totals_are_idempotent(
        qty in 0u64..10_000u64,
        rate in 0u64..1_000_000u64,
        cgst in 0u8..=50u8,
        sgst in 0u8..=50u8,
        igst in 0u8..=100u8,
        discount in 0u64..10_000u64,
        freight in 0u64..10_000u64,
    ) {
        let items = vec![item(qty, rate, cgst, sgst, igst)];
        let discount = Decimal::from(discount);
        let freight = Decimal::from(freight);

        let first = voucher_totals(&items, discount, freight);
        let second = voucher_totals(&items, discount, freight);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_subtotal_is_sum_of_line_amounts(
        lines in proptest::collection::vec((0u64..1_000u64, 0u64..10_000u64), 0..8)
    ) {
        let items: Vec<LineItem> = lines
            .iter()
            .map(|&(qty, rate)| item(qty, rate, 0, 0, 0))
            .collect();

        let expected: Decimal = lines
            .iter()
            .map(|&(qty, rate)| Decimal::from(qty) * Decimal::from(rate))
            .sum();

        let totals = voucher_totals(&items, dec!(0), dec!(0));
        prop_assert_eq!(totals.subtotal, expected);
    }

    #[test]
    fn test_tax_is_non_negative_and_grand_total_consistent(
        qty in 0u64..10_000u64,
        rate in 0u64..1_000_000u64,
        cgst in 0u8..=50u8,
        sgst in 0u8..=50u8,
        igst in 0u8..=100u8,
    ) {
        let items = vec![item(qty, rate, cgst, sgst, igst)];
        let totals = voucher_totals(&items, dec!(0), dec!(0));

        prop_assert!(totals.total_tax >= Decimal::ZERO);
        prop_assert_eq!(totals.grand_total, totals.subtotal + totals.total_tax);
        prop_assert_eq!(totals.net_amount, totals.grand_total);
    }

    #[test]
    fn test_flat_discount_subtracts_from_grand_total(
        qty in 1u64..1_000u64,
        rate in 1u64..10_000u64,
        discount in 0u64..1_000u64,
    ) {
        let items = vec![item(qty, rate, 0, 0, 0)];
        let discount = Decimal::from(discount);

        let totals = voucher_totals(&items, discount, Decimal::ZERO);
        prop_assert_eq!(totals.net_amount, totals.grand_total - discount);
    }
}

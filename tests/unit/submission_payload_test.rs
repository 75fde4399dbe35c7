// Submission adapter round-trip and coercion behavior: serializing a
// draft to the wire payload and reading the numeric fields back must
// preserve the values, and garbage numeric form input must land as zero
// in the payload, never as an error.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use ledgerline::vouchers::models::{
    Entry, EntryForm, EntryType, GstRate, LineItem, LineItemForm, VoucherDraft, VoucherType,
};
use ledgerline::vouchers::services::{voucher_payload, VoucherPayload};

fn draft_with_values() -> VoucherDraft {
    let mut draft = VoucherDraft::template(VoucherType::Purchase);
    draft.company_id = 12;
    draft.voucher_number = "PV-77".to_string();
    draft.date = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
    draft.narration = "June stock replenishment".to_string();
    draft.discount = dec!(25.50);
    draft.set_entries(vec![
        Entry::new(101, EntryType::Debit, dec!(1180)).unwrap(),
        Entry::new(202, EntryType::Credit, dec!(1180)).unwrap(),
    ]);
    draft.set_items(vec![
        LineItem::new(7, dec!(2), dec!(500), GstRate::new(dec!(9), dec!(9), dec!(0))).unwrap(),
    ]);
    draft
}

#[test]
fn test_payload_round_trip_preserves_numeric_fields() {
    let draft = draft_with_values();
    let payload = voucher_payload(&draft);

    let json = serde_json::to_string(&payload).unwrap();
    let read_back: VoucherPayload = serde_json::from_str(&json).unwrap();

    assert_eq!(read_back.company_id, 12);
    assert_eq!(read_back.discount, dec!(25.50));
    assert_eq!(read_back.entries[0].ledger_id, 101);
    assert_eq!(read_back.entries[0].amount, dec!(1180));
    assert_eq!(read_back.items[0].quantity, dec!(2));
    assert_eq!(read_back.items[0].rate, dec!(500));
    assert_eq!(read_back.items[0].amount, dec!(1000));
    assert_eq!(read_back.items[0].tax_amount, dec!(180));
    assert_eq!(read_back.subtotal, payload.subtotal);
    assert_eq!(read_back.grand_total, payload.grand_total);
}

#[test]
fn test_payload_date_is_full_timestamp() {
    let payload = voucher_payload(&draft_with_values());
    assert_eq!(payload.date, "2026-06-30T00:00:00Z");
}

#[test]
fn test_non_numeric_form_input_becomes_zero() {
    let form = LineItemForm {
        item_id: "abc".to_string(),
        quantity: "abc".to_string(),
        rate: "12abc".to_string(),
        cgst_percent: String::new(),
        sgst_percent: "NaN".to_string(),
        igst_percent: "-".to_string(),
    };

    let mut draft = VoucherDraft::template(VoucherType::Sales);
    draft.set_items(vec![form.into_line_item()]);

    let payload = voucher_payload(&draft);
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["items"][0]["itemId"], 0);
    assert_eq!(json["items"][0]["quantity"].as_str(), Some("0"));
    assert_eq!(json["items"][0]["amount"].as_str(), Some("0"));
    assert_eq!(json["items"][0]["taxAmount"].as_str(), Some("0"));
}

#[test]
fn test_entry_form_coercion_reaches_payload() {
    let mut draft = VoucherDraft::template(VoucherType::Receipt);
    let garbled = EntryForm {
        ledger_id: "not-a-number".to_string(),
        entry_type: EntryType::Debit,
        amount: "ten".to_string(),
    };
    draft.update_entry(0, garbled.into_entry()).unwrap();

    let payload = voucher_payload(&draft);

    assert_eq!(payload.entries[0].ledger_id, 0);
    assert_eq!(payload.entries[0].amount, dec!(0));
}

#[test]
fn test_entry_codes_reversed_between_families() {
    let mut receipt = VoucherDraft::template(VoucherType::Receipt);
    receipt.set_entries(vec![
        Entry::new(1, EntryType::Debit, dec!(5)).unwrap(),
        Entry::new(2, EntryType::Credit, dec!(5)).unwrap(),
    ]);

    let mut purchase = VoucherDraft::template(VoucherType::Purchase);
    purchase.set_entries(vec![
        Entry::new(1, EntryType::Debit, dec!(5)).unwrap(),
        Entry::new(2, EntryType::Credit, dec!(5)).unwrap(),
    ]);

    let receipt_payload = voucher_payload(&receipt);
    let purchase_payload = voucher_payload(&purchase);

    assert_eq!(receipt_payload.entries[0].entry_type, 1);
    assert_eq!(purchase_payload.entries[0].entry_type, 0);
}

// Raw form input as it arrives from a UI: every numeric field is a string.
// Conversion into the typed draft coerces defensively — blank or garbage
// numeric input becomes zero, never an error. Hard validation happens
// later, at the submit transition, on the typed draft.

use serde::Deserialize;

use super::line_item::{GstRate, LineItem};
use super::voucher::{Entry, EntryType};
use crate::core::numeric::{decimal_or_zero, id_or_zero};

/// One ledger-entry row as typed into a form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryForm {
    #[serde(default, rename = "ledgerId")]
    pub ledger_id: String,
    #[serde(default, rename = "entryType")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub amount: String,
}

impl EntryForm {
    pub fn into_entry(self) -> Entry {
        Entry {
            ledger_id: id_or_zero(&self.ledger_id),
            entry_type: self.entry_type,
            amount: decimal_or_zero(&self.amount),
        }
    }
}

/// One line-item row as typed into a form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItemForm {
    #[serde(default, rename = "itemId")]
    pub item_id: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default, rename = "cgstPercent")]
    pub cgst_percent: String,
    #[serde(default, rename = "sgstPercent")]
    pub sgst_percent: String,
    #[serde(default, rename = "igstPercent")]
    pub igst_percent: String,
}

impl LineItemForm {
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            item_id: id_or_zero(&self.item_id),
            quantity: decimal_or_zero(&self.quantity),
            rate: decimal_or_zero(&self.rate),
            gst: GstRate::new(
                decimal_or_zero(&self.cgst_percent),
                decimal_or_zero(&self.sgst_percent),
                decimal_or_zero(&self.igst_percent),
            ),
        }
    }
}

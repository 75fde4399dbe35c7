// The voucher draft is the aggregate a user composes before posting: a
// header, a list of ledger entries (debit/credit postings) and, for the
// trading voucher types, a list of line items. Derived totals are never
// stored on the draft — see the totals service.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;
use crate::core::{AppError, Result};

/// Accounting voucher kinds supported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    Receipt,
    Payment,
    Sales,
    Purchase,
    PurchaseReturn,
}

impl VoucherType {
    /// Wire code the backend expects for a Debit entry of this voucher type.
    ///
    /// The conventions genuinely differ between voucher families and the
    /// backend relies on both: receipt/payment flows post Debit as `1`,
    /// the trading vouchers post Debit as `0`. Do not unify without a
    /// matching backend change.
    pub fn debit_code(&self) -> u8 {
        match self {
            VoucherType::Receipt | VoucherType::Payment => 1,
            VoucherType::Sales | VoucherType::Purchase | VoucherType::PurchaseReturn => 0,
        }
    }

    /// Wire code for a Credit entry; always the complement of [`Self::debit_code`].
    pub fn credit_code(&self) -> u8 {
        1 - self.debit_code()
    }

    /// Whether drafts of this type carry line items.
    pub fn has_items(&self) -> bool {
        matches!(
            self,
            VoucherType::Sales | VoucherType::Purchase | VoucherType::PurchaseReturn
        )
    }

    /// Whether drafts of this type carry dispatch/freight details.
    pub fn has_dispatch(&self) -> bool {
        matches!(self, VoucherType::Sales)
    }
}

impl std::fmt::Display for VoucherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoucherType::Receipt => write!(f, "receipt"),
            VoucherType::Payment => write!(f, "payment"),
            VoucherType::Sales => write!(f, "sales"),
            VoucherType::Purchase => write!(f, "purchase"),
            VoucherType::PurchaseReturn => write!(f, "purchase_return"),
        }
    }
}

/// Posting side of a ledger entry.
///
/// Symbolic on the client; the numeric wire encoding is per voucher type
/// (see [`VoucherType::debit_code`]) and applied only when building the
/// submission payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Debit,
    Credit,
}

impl Default for EntryType {
    fn default() -> Self {
        EntryType::Debit
    }
}

/// One ledger posting line within a voucher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// External ledger catalog reference; 0 = not selected yet
    #[serde(rename = "ledgerId")]
    pub ledger_id: i64,

    #[serde(rename = "entryType")]
    pub entry_type: EntryType,

    pub amount: Decimal,
}

impl Entry {
    pub fn new(ledger_id: i64, entry_type: EntryType, amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Entry amount must be non-negative, got: {}",
                amount
            )));
        }
        Ok(Self {
            ledger_id,
            entry_type,
            amount,
        })
    }

    /// Empty posting line of the given side, as seeded by templates.
    pub fn blank(entry_type: EntryType) -> Self {
        Self {
            ledger_id: 0,
            entry_type,
            amount: Decimal::ZERO,
        }
    }
}

/// Freight and shipment metadata, used by Sales vouchers only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchDetails {
    #[serde(rename = "freightCharges")]
    pub freight_charges: Decimal,
    #[serde(rename = "dispatchedThrough")]
    pub dispatched_through: String,
    pub destination: String,
    #[serde(rename = "vehicleNumber")]
    pub vehicle_number: String,
}

/// The in-progress accounting voucher being composed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoucherDraft {
    /// Client-generated key for list rendering and draft bookkeeping.
    /// Never sent to the backend — the submission payload strips it.
    #[serde(rename = "clientId")]
    pub client_id: Uuid,

    /// Counterparty/company reference; 0 = unset
    #[serde(rename = "companyId")]
    pub company_id: i64,

    /// User-supplied identifier; empty allowed pre-submit, required at submit
    #[serde(rename = "voucherNumber")]
    pub voucher_number: String,

    #[serde(rename = "voucherType")]
    pub voucher_type: VoucherType,

    pub date: NaiveDate,

    /// Free text, optional
    pub narration: String,

    /// Insertion order is display order
    pub entries: Vec<Entry>,

    /// Empty for pure-ledger vouchers (receipt/payment)
    pub items: Vec<LineItem>,

    /// Flat discount subtracted from the voucher total
    pub discount: Decimal,

    pub dispatch: Option<DispatchDetails>,
}

impl VoucherDraft {
    /// Fresh draft seeded with the voucher-type template.
    ///
    /// Receipt and Payment seed one Debit + one Credit posting pair; the
    /// trading vouchers additionally seed one empty line item, and Sales
    /// seeds empty dispatch details. Dated today.
    pub fn template(voucher_type: VoucherType) -> Self {
        let entries = vec![Entry::blank(EntryType::Debit), Entry::blank(EntryType::Credit)];
        let items = if voucher_type.has_items() {
            vec![LineItem::blank()]
        } else {
            Vec::new()
        };
        let dispatch = voucher_type.has_dispatch().then(DispatchDetails::default);

        Self {
            client_id: Uuid::new_v4(),
            company_id: 0,
            voucher_number: String::new(),
            voucher_type,
            date: Utc::now().date_naive(),
            narration: String::new(),
            entries,
            items,
            discount: Decimal::ZERO,
            dispatch,
        }
    }

    // --- entry list management ---

    /// Append an extra credit/debit split to the end of the entry list.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Replace the entry at `index` wholesale. Callers supply the full
    /// merged entry; there is no partial-field patch at this layer.
    pub fn update_entry(&mut self, index: usize, entry: Entry) -> Result<()> {
        let slot = self
            .entries
            .get_mut(index)
            .ok_or_else(|| AppError::validation(format!("no entry at index {}", index)))?;
        *slot = entry;
        Ok(())
    }

    /// Remove the entry at `index`, refusing to drop the last entry of
    /// either posting side. On refusal the list is left unchanged.
    pub fn remove_entry(&mut self, index: usize) -> Result<()> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| AppError::validation(format!("no entry at index {}", index)))?;

        let same_side = self
            .entries
            .iter()
            .filter(|e| e.entry_type == entry.entry_type)
            .count();
        if same_side <= 1 {
            return Err(AppError::validation(format!(
                "cannot remove the last {:?} entry",
                entry.entry_type
            )));
        }

        self.entries.remove(index);
        Ok(())
    }

    /// Wholesale replace, used on template reset and type switch.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    // --- item list management ---

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

    // --- submit-time checks ---

    /// Sum of posted amounts on one side.
    pub fn side_total(&self, side: EntryType) -> Decimal {
        self.entries
            .iter()
            .filter(|e| e.entry_type == side)
            .map(|e| e.amount)
            .sum()
    }

    /// Required-field and balance checks run at the submit transition.
    /// Balance (Σ debit == Σ credit) is deliberately not enforced on every
    /// mutation — a half-edited draft is allowed to be lopsided.
    pub fn validate_for_submit(&self) -> Result<()> {
        if self.voucher_number.trim().is_empty() {
            return Err(AppError::validation("Voucher number is required"));
        }

        if let Some(entry) = self.entries.iter().find(|e| e.ledger_id == 0) {
            return Err(AppError::validation(format!(
                "every entry must have a ledger selected ({:?} entry has none)",
                entry.entry_type
            )));
        }

        let has_debit = self.entries.iter().any(|e| e.entry_type == EntryType::Debit);
        let has_credit = self
            .entries
            .iter()
            .any(|e| e.entry_type == EntryType::Credit);
        if !has_debit || !has_credit {
            return Err(AppError::validation(
                "a postable voucher needs at least one debit and one credit entry",
            ));
        }

        let debit_total = self.side_total(EntryType::Debit);
        let credit_total = self.side_total(EntryType::Credit);
        if debit_total != credit_total {
            return Err(AppError::validation(format!(
                "entries do not balance: debit {} vs credit {}",
                debit_total, credit_total
            )));
        }

        Ok(())
    }
}

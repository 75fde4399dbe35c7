// A line item is one purchased/sold unit line inside a voucher or order
// document. Quantity × rate and the GST breakdown are the only stored
// facts; every monetary figure derived from them is computed on read so a
// stale stored total can never disagree with the inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{numeric, AppError, Result};

/// Three-component GST rate attached to a line item.
///
/// CGST and SGST are the domestic split components and co-occur; IGST is
/// the cross-border alternate. In practice a line carries either
/// CGST+SGST or IGST, with the unused components at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstRate {
    #[serde(rename = "cgstPercent")]
    pub cgst_percent: Decimal,
    #[serde(rename = "sgstPercent")]
    pub sgst_percent: Decimal,
    #[serde(rename = "igstPercent")]
    pub igst_percent: Decimal,
}

impl GstRate {
    pub fn new(cgst_percent: Decimal, sgst_percent: Decimal, igst_percent: Decimal) -> Self {
        Self {
            cgst_percent,
            sgst_percent,
            igst_percent,
        }
    }

    /// Effective percentage applied to a line amount.
    ///
    /// All three components are summed unconditionally, with no branch on
    /// domestic vs. cross-border. That matches the backend's ledger
    /// postings today; if mutual exclusion is ever enforced, this function
    /// is the only place that changes.
    pub fn combined_percent(&self) -> Decimal {
        self.cgst_percent + self.sgst_percent + self.igst_percent
    }

    /// Validate that every component is a percentage in [0, 100].
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("cgst", self.cgst_percent),
            ("sgst", self.sgst_percent),
            ("igst", self.igst_percent),
        ] {
            if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                return Err(AppError::validation(format!(
                    "{} rate must be between 0 and 100, got: {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// One purchased/sold unit line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Catalog item reference; 0 = not selected yet
    #[serde(rename = "itemId")]
    pub item_id: i64,

    /// Quantity of units
    pub quantity: Decimal,

    /// Price per unit
    pub rate: Decimal,

    /// Tax breakdown for this line
    pub gst: GstRate,
}

impl LineItem {
    /// Create a line item with validation
    pub fn new(item_id: i64, quantity: Decimal, rate: Decimal, gst: GstRate) -> Result<Self> {
        if quantity < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Quantity must be non-negative, got: {}",
                quantity
            )));
        }
        if rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Rate must be non-negative, got: {}",
                rate
            )));
        }
        gst.validate()?;

        Ok(Self {
            item_id,
            quantity,
            rate,
            gst,
        })
    }

    /// An empty line as seeded into a fresh Sales/Purchase draft.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Line amount before tax: `quantity × rate`.
    pub fn amount(&self) -> Decimal {
        self.quantity * self.rate
    }

    /// Tax owed on this line: `amount × combined GST % / 100`.
    pub fn tax_amount(&self) -> Decimal {
        numeric::percent_of(self.amount(), self.gst.combined_percent())
    }
}

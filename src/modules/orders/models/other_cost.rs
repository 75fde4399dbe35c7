use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Ancillary charge (freight, handling, insurance) attached to a purchase
/// order or goods receipt note, priced in a foreign currency and carried
/// into the order subtotal after conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherCost {
    pub name: String,

    /// Charge amount in `currency`
    pub amount: Decimal,

    /// ISO currency code of `amount`
    pub currency: String,

    /// Conversion rate into the document's base currency
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Decimal,
}

impl OtherCost {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        exchange_rate: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            currency: currency.into(),
            exchange_rate,
        }
    }

    /// Charge expressed in the document's base currency.
    pub fn converted_amount(&self) -> Decimal {
        self.amount * self.exchange_rate
    }
}

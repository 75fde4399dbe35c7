use rust_decimal::Decimal;
use std::str::FromStr;

/// Defensive parse of a form-supplied amount field.
///
/// Empty, whitespace-only, or unparseable input becomes zero — the form
/// layer never rejects a numeric field, matching the backend's tolerance
/// for blank optional amounts. Callers that need hard validation must
/// check the raw string themselves before coercing.
pub fn decimal_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(raw = %raw, "non-numeric amount coerced to zero");
            Decimal::ZERO
        }
    }
}

/// Defensive parse of a form-supplied integer id field (ledger ids,
/// catalog item ids). Same coerce-to-zero policy as [`decimal_or_zero`];
/// zero is the "unset" sentinel for foreign references.
pub fn id_or_zero(raw: &str) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(raw = %raw, "non-numeric id coerced to zero");
            0
        }
    }
}

/// Percentage application: `base × percent / 100`.
pub fn percent_of(base: Decimal, percent: Decimal) -> Decimal {
    base * percent / Decimal::ONE_HUNDRED
}

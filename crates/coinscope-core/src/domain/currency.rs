use crate::ValidationError;

pub const DEFAULT_CURRENCY: &str = "usd";

const MAX_CURRENCY_LEN: usize = 10;

/// Lowercases and trims a quote currency, falling back to `usd` when blank.
pub fn normalize_currency(input: Option<&str>) -> String {
    match input.map(str::trim) {
        Some(code) if !code.is_empty() => code.to_ascii_lowercase(),
        _ => String::from(DEFAULT_CURRENCY),
    }
}

/// Validates a user-supplied quote currency and returns it normalized.
///
/// The API accepts fiat codes as well as coin codes (`btc`, `sats`), so only
/// the character set and length are checked.
pub fn validate_currency_code(input: &str) -> Result<String, ValidationError> {
    let normalized = input.trim().to_ascii_lowercase();
    let is_valid = !normalized.is_empty()
        && normalized.len() <= MAX_CURRENCY_LEN
        && normalized.chars().all(|ch| ch.is_ascii_alphanumeric());

    if !is_valid {
        return Err(ValidationError::InvalidCurrency {
            value: input.to_owned(),
        });
    }

    Ok(normalized)
}

pub fn is_default_currency(code: &str) -> bool {
    code.eq_ignore_ascii_case(DEFAULT_CURRENCY)
}

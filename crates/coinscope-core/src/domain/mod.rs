//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`CoinRecord`] | Unified coin snapshot produced by every parser |
//! | [`CoinCollection`] | Ranked listing from the markets endpoint |
//! | [`OhlcRange`] | 24h high/low extrema from an OHLC series |
//!
//! Records own their strings and are never shared across requests.

mod currency;
mod record;

pub use currency::{
    is_default_currency, normalize_currency, validate_currency_code, DEFAULT_CURRENCY,
};
pub use record::{CoinCollection, CoinRecord, OhlcRange};

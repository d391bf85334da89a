use serde_json::{Map, Value};
use tracing::debug;

use super::fields::{get_number, parse_document};
use super::normalize::{derive_name, derive_symbol};
use crate::domain::{normalize_currency, CoinRecord};
use crate::ParseError;

/// Currency-scoped key names in a `/simple/price` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFieldNames {
    pub price: String,
    pub change_24h: String,
    pub market_cap: String,
    pub volume_24h: String,
}

impl PriceFieldNames {
    pub const LAST_UPDATED_AT: &'static str = "last_updated_at";

    pub fn for_currency(currency: &str) -> Self {
        Self {
            price: currency.to_owned(),
            change_24h: format!("{currency}_24h_change"),
            market_cap: format!("{currency}_market_cap"),
            volume_24h: format!("{currency}_24h_vol"),
        }
    }

    /// True when at least one currency-scoped key holds a number.
    pub fn any_present(&self, entry: &Map<String, Value>) -> bool {
        [
            &self.price,
            &self.change_24h,
            &self.market_cap,
            &self.volume_24h,
        ]
        .into_iter()
        .any(|key| entry.get(key.as_str()).is_some_and(Value::is_number))
    }
}

/// Parses a `/simple/price` body; failures yield `ok == false`.
///
/// The returned record always carries the normalized currency, even when the
/// payload is rejected.
pub fn parse_single_price(json: &[u8], currency: &str) -> CoinRecord {
    let currency = normalize_currency(Some(currency));
    try_parse_single_price(json, &currency).unwrap_or_else(|error| {
        debug!(%error, "simple price payload rejected");
        CoinRecord::empty(currency)
    })
}

/// Fallible form of [`parse_single_price`].
pub fn try_parse_single_price(json: &[u8], currency: &str) -> Result<CoinRecord, ParseError> {
    let currency = normalize_currency(Some(currency));
    let document = parse_document(json)?;
    let Value::Object(root) = document else {
        return Err(ParseError::unexpected_shape("object"));
    };

    let (id, entry) = root
        .iter()
        .next()
        .ok_or_else(|| ParseError::empty("price response contains no coin entries"))?;
    let Value::Object(entry) = entry else {
        return Err(ParseError::unexpected_shape("object per coin entry"));
    };

    let fields = PriceFieldNames::for_currency(&currency);
    if !fields.any_present(entry) {
        return Err(ParseError::empty(format!(
            "entry '{id}' has no numeric {currency} price fields"
        )));
    }

    // The endpoint reports a single 24h change figure; it feeds both fields.
    let change = get_number(entry, &fields.change_24h);

    let mut record = CoinRecord::empty(currency);
    record.current_price = get_number(entry, &fields.price);
    record.price_change_24h = change;
    record.price_change_pct_24h = change;
    record.market_cap = get_number(entry, &fields.market_cap);
    record.volume_24h = get_number(entry, &fields.volume_24h);
    record.last_updated_at = get_number(entry, PriceFieldNames::LAST_UPDATED_AT) as i64;

    if !id.is_empty() {
        record.symbol = Some(derive_symbol(id));
        record.name = Some(derive_name(id));
    }
    record.id = Some(id.clone());
    record.ok = true;

    debug!(id = %id, currency = %record.currency, "parsed simple price");
    Ok(record)
}

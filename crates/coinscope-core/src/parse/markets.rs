use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::fields::{get_number, get_string, parse_document, Object};
use crate::domain::{CoinCollection, CoinRecord, DEFAULT_CURRENCY};
use crate::ParseError;

/// Parses a `/coins/markets` listing, keeping at most `limit` coin objects.
///
/// A short array is not an error; `limit <= 0`, invalid JSON or a non-array
/// body yield an empty, unsuccessful collection.
pub fn parse_markets(json: &[u8], limit: i64) -> CoinCollection {
    try_parse_markets(json, limit).unwrap_or_else(|error| {
        debug!(%error, "markets payload rejected");
        CoinCollection::failed()
    })
}

/// Fallible form of [`parse_markets`].
pub fn try_parse_markets(json: &[u8], limit: i64) -> Result<CoinCollection, ParseError> {
    let limit = usize::try_from(limit)
        .ok()
        .filter(|limit| *limit > 0)
        .ok_or_else(|| {
            ParseError::invalid_argument(format!("limit must be positive, got {limit}"))
        })?;

    let Value::Array(items) = parse_document(json)? else {
        return Err(ParseError::unexpected_shape("array"));
    };

    let parsed_at = OffsetDateTime::now_utc().unix_timestamp();
    let coins: Vec<CoinRecord> = items
        .iter()
        .filter_map(Value::as_object)
        .take(limit)
        .map(|item| market_record(item, parsed_at))
        .collect();

    debug!(count = coins.len(), limit, "parsed markets listing");
    Ok(CoinCollection::new(coins))
}

fn market_record(item: &Object, parsed_at: i64) -> CoinRecord {
    let mut coin = CoinRecord::empty(DEFAULT_CURRENCY);

    coin.id = get_string(item, "id");
    coin.symbol = get_string(item, "symbol").map(|symbol| symbol.to_ascii_uppercase());
    coin.name = get_string(item, "name");
    coin.current_price = get_number(item, "current_price");
    coin.market_cap = get_number(item, "market_cap");
    coin.volume_24h = get_number(item, "total_volume");
    coin.price_change_pct_24h = get_number(item, "price_change_percentage_24h");
    coin.price_change_24h = coin.current_price * coin.price_change_pct_24h / 100.0;
    coin.high_24h = get_number(item, "high_24h");
    coin.low_24h = get_number(item, "low_24h");
    coin.last_updated_at = get_string(item, "last_updated")
        .map(|raw| last_updated_seconds(&raw, parsed_at))
        .unwrap_or(0);
    coin.ok = true;

    coin
}

/// RFC 3339 timestamp in unix seconds; unparseable text falls back to `parsed_at`.
fn last_updated_seconds(raw: &str, parsed_at: i64) -> i64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }

    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(value) => value.unix_timestamp(),
        Err(error) => {
            warn!(value = raw, %error, "unparseable last_updated, using parse time");
            parsed_at
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const LISTING: &str = r#"[
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 100.0,
            "market_cap": 1.3e12,
            "total_volume": 2.5e10,
            "price_change_percentage_24h": 5.0,
            "high_24h": 105.0,
            "low_24h": 94.5,
            "last_updated": "2024-01-01T00:00:00.000Z"
        },
        { "id": "ethereum", "symbol": "eth", "name": "Ethereum", "current_price": 2000.0 },
        { "id": "tether", "symbol": "usdt", "name": "Tether" }
    ]"#;

    #[test]
    fn derives_absolute_change_from_percentage() {
        let markets = parse_markets(LISTING.as_bytes(), 10);
        let btc = &markets.coins()[0];

        assert_eq!(btc.price_change_pct_24h, 5.0);
        assert_eq!(btc.price_change_24h, 5.0);
    }

    #[test]
    fn clamps_to_available_elements() {
        let markets = parse_markets(LISTING.as_bytes(), 10);
        assert!(markets.ok());
        assert_eq!(markets.count(), 3);
        assert_eq!(markets.coins().len(), 3);
    }

    #[test]
    fn honours_smaller_limit() {
        let markets = parse_markets(LISTING.as_bytes(), 2);
        assert_eq!(markets.count(), 2);
        assert_eq!(markets.coins()[1].id.as_deref(), Some("ethereum"));
    }

    #[test]
    fn maps_absolute_field_names() {
        let markets = parse_markets(LISTING.as_bytes(), 1);
        let btc = &markets.coins()[0];

        assert!(btc.ok);
        assert_eq!(btc.id.as_deref(), Some("bitcoin"));
        assert_eq!(btc.symbol.as_deref(), Some("BTC"));
        assert_eq!(btc.name.as_deref(), Some("Bitcoin"));
        assert_eq!(btc.currency, "usd");
        assert_eq!(btc.market_cap, 1.3e12);
        assert_eq!(btc.volume_24h, 2.5e10);
        assert_eq!((btc.high_24h, btc.low_24h), (105.0, 94.5));
        assert_eq!(btc.last_updated_at, 1_704_067_200);
    }

    #[test]
    fn missing_fields_stay_zero() {
        let markets = parse_markets(LISTING.as_bytes(), 3);
        let tether = &markets.coins()[2];

        assert!(tether.ok);
        assert_eq!(tether.current_price, 0.0);
        assert_eq!(tether.price_change_24h, 0.0);
        assert_eq!(tether.last_updated_at, 0);
    }

    #[test]
    fn zero_price_yields_zero_change() {
        let markets = parse_markets(br#"[{"price_change_percentage_24h": -12.5}]"#, 1);
        assert_eq!(markets.coins()[0].price_change_24h, 0.0);
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_parse_time() {
        let before = OffsetDateTime::now_utc().unix_timestamp();
        let markets = parse_markets(br#"[{"last_updated": "yesterday"}]"#, 1);
        let after = OffsetDateTime::now_utc().unix_timestamp();

        let stamp = markets.coins()[0].last_updated_at;
        assert!(stamp >= before && stamp <= after);
    }

    #[test]
    fn non_object_elements_do_not_consume_slots() {
        let markets = parse_markets(br#"[1, "x", {"id": "solana"}, {"id": "cardano"}]"#, 1);
        assert_eq!(markets.count(), 1);
        assert_eq!(markets.coins()[0].id.as_deref(), Some("solana"));
    }

    #[test]
    fn empty_array_is_still_ok() {
        let markets = parse_markets(b"[]", 10);
        assert!(markets.ok());
        assert_eq!(markets.count(), 0);
    }

    #[test]
    fn rejects_bad_input_without_panicking() {
        for limit in [0, -3] {
            let markets = parse_markets(LISTING.as_bytes(), limit);
            assert!(!markets.ok());
            assert_eq!(markets.count(), 0);
        }
        assert_eq!(
            try_parse_markets(LISTING.as_bytes(), 0)
                .expect_err("must fail")
                .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            try_parse_markets(br#"{"status":"rate limited"}"#, 5)
                .expect_err("must fail")
                .kind(),
            ErrorKind::UnexpectedShape
        );
        assert!(!parse_markets(b"[{", 5).ok());
    }
}

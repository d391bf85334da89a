use serde_json::Value;
use tracing::debug;

use super::fields::parse_document;
use crate::domain::OhlcRange;
use crate::ParseError;

const HIGH_INDEX: usize = 2;
const LOW_INDEX: usize = 3;
const MIN_ROW_LEN: usize = 5;

/// Aggregates a `/coins/{id}/ohlc` series into its 24h high/low.
///
/// Rows are `[timestamp, open, high, low, close]`; malformed rows are skipped.
pub fn parse_ohlc(json: &[u8]) -> OhlcRange {
    match try_parse_ohlc(json) {
        Ok((high, low)) => OhlcRange {
            high,
            low,
            found: true,
        },
        Err(error) => {
            debug!(%error, "ohlc payload yielded no range");
            OhlcRange::not_found()
        }
    }
}

/// Fallible form of [`parse_ohlc`] returning `(high, low)`.
pub fn try_parse_ohlc(json: &[u8]) -> Result<(f64, f64), ParseError> {
    let Value::Array(rows) = parse_document(json)? else {
        return Err(ParseError::unexpected_shape("array"));
    };

    rows.iter()
        .filter_map(candle_extrema)
        .fold(None, |acc, (high, low)| match acc {
            None => Some((high, low)),
            Some((max_high, min_low)) => Some((max_high.max(high), min_low.min(low))),
        })
        .ok_or_else(|| ParseError::empty("ohlc series has no well-formed candles"))
}

fn candle_extrema(row: &Value) -> Option<(f64, f64)> {
    let row = row.as_array()?;
    if row.len() < MIN_ROW_LEN {
        return None;
    }
    let high = row[HIGH_INDEX].as_f64()?;
    let low = row[LOW_INDEX].as_f64()?;
    Some((high, low))
}

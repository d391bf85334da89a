//! Payload parsers for the three CoinGecko response shapes.
//!
//! | Endpoint | Parser | Output |
//! |----------|--------|--------|
//! | `/simple/price` | [`parse_single_price`] | [`CoinRecord`](crate::CoinRecord) |
//! | `/coins/{id}/ohlc` | [`parse_ohlc`] | [`OhlcRange`](crate::OhlcRange) |
//! | `/coins/markets` | [`parse_markets`] | [`CoinCollection`](crate::CoinCollection) |
//!
//! Each parser has a `try_` form returning [`ParseError`](crate::ParseError)
//! and an infallible form that reports failure through the `ok`/`found` flag.
//! Missing or mistyped fields inside an accepted payload read as zero; they
//! never fail the record.

mod fields;
mod markets;
mod normalize;
mod ohlc;
mod simple_price;

pub use fields::{get_number, get_number_or, get_string};
pub use markets::{parse_markets, try_parse_markets};
pub use normalize::{derive_name, derive_symbol};
pub use ohlc::{parse_ohlc, try_parse_ohlc};
pub use simple_price::{parse_single_price, try_parse_single_price, PriceFieldNames};

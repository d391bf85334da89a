//! # Coinscope Core
//!
//! Response parsing and normalization for the CoinGecko public API.
//!
//! ## Overview
//!
//! Three loosely-structured payload shapes are turned into one record type:
//!
//! - `/simple/price` → [`CoinRecord`] with currency-scoped field names
//! - `/coins/{id}/ohlc` → [`OhlcRange`] (24h high/low extrema)
//! - `/coins/markets` → [`CoinCollection`] of ranked records
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Sequential API client (resolve, fetch, parse, enrich) |
//! | [`config`] | Client settings and environment overrides |
//! | [`display`] | Magnitude scaling, price precision, currency notation |
//! | [`domain`] | Record types |
//! | [`endpoints`] | URL construction |
//! | [`error`] | Error kinds and error types |
//! | [`http_client`] | Transport trait and reqwest implementation |
//! | [`parse`] | Payload parsers and field normalization |
//! | [`resolver`] | Ticker ↔ canonical ID mapping |
//!
//! ## Quick Start
//!
//! ```rust
//! use coinscope_core::{parse_single_price, resolve};
//!
//! assert_eq!(resolve("btc"), "bitcoin");
//!
//! let record = parse_single_price(br#"{"bitcoin":{"usd":64000.5}}"#, "usd");
//! assert!(record.ok);
//! assert_eq!(record.symbol.as_deref(), Some("BTC"));
//! ```
//!
//! ## Error Handling
//!
//! Parsers report failure through `ok`/`found` flags; their `try_` forms
//! return [`ParseError`] with an [`ErrorKind`]. Client operations return
//! [`CoreError`]:
//!
//! ```rust
//! use coinscope_core::{CoreError, ErrorKind};
//!
//! fn describe(error: &CoreError) -> &'static str {
//!     match error.kind() {
//!         ErrorKind::TransportFailure => "network problem",
//!         ErrorKind::NotFound => "unknown coin",
//!         ErrorKind::InvalidArgument => "bad input",
//!         _ => "unexpected response",
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod domain;
pub mod endpoints;
pub mod error;
pub mod http_client;
pub mod parse;
pub mod resolver;

pub use client::{validate_top_limit, CoinGeckoClient, DEFAULT_TOP_LIMIT, MAX_TOP_LIMIT};

pub use config::ClientConfig;

pub use display::{
    price_decimals, scale_market_cap, scale_volume, CurrencyStyle, Magnitude, ScaledAmount,
};

pub use domain::{
    is_default_currency, normalize_currency, validate_currency_code, CoinCollection, CoinRecord,
    OhlcRange, DEFAULT_CURRENCY,
};

pub use endpoints::Endpoints;

pub use error::{CoreError, ErrorKind, ParseError, ValidationError};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, StubHttpClient,
};

pub use parse::{
    derive_name, derive_symbol, parse_markets, parse_ohlc, parse_single_price, try_parse_markets,
    try_parse_ohlc, try_parse_single_price,
};

pub use resolver::{resolve, ticker_for_id};

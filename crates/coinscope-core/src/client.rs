//! Sequential CoinGecko client: resolve → fetch → parse → optional OHLC enrichment.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::domain::{is_default_currency, normalize_currency, validate_currency_code};
use crate::endpoints::Endpoints;
use crate::http_client::{HttpClient, HttpError, HttpRequest, ReqwestHttpClient};
use crate::parse::{parse_ohlc, try_parse_markets, try_parse_single_price};
use crate::{resolver, CoinCollection, CoinRecord, CoreError, ErrorKind, ValidationError};

pub const DEFAULT_TOP_LIMIT: u16 = 10;
pub const MAX_TOP_LIMIT: u16 = 250;

/// Checks a requested listing size against `1..=250`.
pub fn validate_top_limit(limit: i64) -> Result<u16, ValidationError> {
    u16::try_from(limit)
        .ok()
        .filter(|limit| (1..=MAX_TOP_LIMIT).contains(limit))
        .ok_or(ValidationError::LimitOutOfRange {
            value: limit,
            min: 1,
            max: i64::from(MAX_TOP_LIMIT),
        })
}

/// API client that issues at most two requests per lookup, one after the other.
#[derive(Clone)]
pub struct CoinGeckoClient {
    http_client: Arc<dyn HttpClient>,
    endpoints: Endpoints,
    timeout: Duration,
}

impl CoinGeckoClient {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &ClientConfig) -> Self {
        Self {
            http_client,
            endpoints: Endpoints::new(config.base_url.clone()),
            timeout: config.timeout,
        }
    }

    /// Client backed by reqwest with the configured user agent.
    pub fn from_config(config: &ClientConfig) -> Result<Self, HttpError> {
        let transport = ReqwestHttpClient::new(&config.user_agent)?;
        Ok(Self::new(Arc::new(transport), config))
    }

    /// Single-coin snapshot in `currency` (default `usd`).
    ///
    /// USD lookups are enriched with the 24h high/low from the OHLC endpoint;
    /// a failure there is logged and leaves the range at zero.
    pub async fn coin_detail(
        &self,
        ticker: &str,
        currency: Option<&str>,
    ) -> Result<CoinRecord, CoreError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ValidationError::EmptySymbol.into());
        }
        let currency = match currency {
            Some(code) => validate_currency_code(code)?,
            None => normalize_currency(None),
        };

        let id = resolver::resolve(ticker);
        debug!(ticker, id = %id, currency = %currency, "resolved coin id");

        let body = self
            .fetch(&self.endpoints.simple_price(&id, &currency))
            .await?;
        if body.trim().is_empty() || body.contains("\"error\"") {
            return Err(CoreError::NotFound { id });
        }

        let mut record = try_parse_single_price(body.as_bytes(), &currency).map_err(|error| {
            if error.kind() == ErrorKind::EmptySource {
                CoreError::NotFound { id: id.clone() }
            } else {
                CoreError::from(error)
            }
        })?;

        if is_default_currency(&currency) {
            match self.fetch(&self.endpoints.ohlc(&id)).await {
                Ok(ohlc) => record.apply_range(parse_ohlc(ohlc.as_bytes())),
                Err(error) => warn!(%error, id = %id, "skipping 24h range enrichment"),
            }
        }

        Ok(record)
    }

    /// Top coins by market cap, quoted in USD.
    pub async fn top_coins(&self, limit: u16) -> Result<CoinCollection, CoreError> {
        let limit = validate_top_limit(i64::from(limit))?;
        let body = self.fetch(&self.endpoints.markets(limit)).await?;
        let markets = try_parse_markets(body.as_bytes(), i64::from(limit))?;

        info!(requested = limit, received = markets.count(), "fetched markets listing");
        Ok(markets)
    }

    /// One GET; anything but HTTP 200 is a transport failure.
    pub async fn fetch(&self, url: &str) -> Result<String, CoreError> {
        debug!(url, "GET");
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout(self.timeout);

        let response =
            self.http_client
                .execute(request)
                .await
                .map_err(|source| CoreError::Transport {
                    url: url.to_owned(),
                    source,
                })?;

        if !response.is_ok() {
            return Err(CoreError::Status {
                url: url.to_owned(),
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

use urlencoding::encode;

use crate::domain::DEFAULT_CURRENCY;

/// URL builder for the three CoinGecko endpoints used by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn simple_price(&self, id: &str, currency: &str) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}&include_24hr_change=true\
             &include_market_cap=true&include_24hr_vol=true&include_last_updated_at=true",
            self.base_url,
            encode(id),
            encode(currency)
        )
    }

    /// One day of candles; the endpoint is only queried in USD.
    pub fn ohlc(&self, id: &str) -> String {
        format!(
            "{}/coins/{}/ohlc?vs_currency={DEFAULT_CURRENCY}&days=1",
            self.base_url,
            encode(id)
        )
    }

    pub fn markets(&self, limit: u16) -> String {
        format!(
            "{}/coins/markets?vs_currency={DEFAULT_CURRENCY}&order=market_cap_desc&per_page={limit}\
             &page=1&sparkline=false&price_change_percentage=24h",
            self.base_url
        )
    }
}

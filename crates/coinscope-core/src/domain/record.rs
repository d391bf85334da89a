use serde::Serialize;

use super::currency::DEFAULT_CURRENCY;

/// Unified coin snapshot produced by every parse path.
///
/// Callers must check [`CoinRecord::ok`] before trusting any numeric field; a
/// failed record carries zeros and the currency code only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinRecord {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub currency: String,
    pub current_price: f64,
    pub price_change_24h: f64,
    pub price_change_pct_24h: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub last_updated_at: i64,
    pub ok: bool,
}

impl CoinRecord {
    /// Empty, unsuccessful record quoted in `currency`.
    pub fn empty(currency: impl Into<String>) -> Self {
        Self {
            id: None,
            symbol: None,
            name: None,
            currency: currency.into(),
            current_price: 0.0,
            price_change_24h: 0.0,
            price_change_pct_24h: 0.0,
            market_cap: 0.0,
            volume_24h: 0.0,
            high_24h: 0.0,
            low_24h: 0.0,
            last_updated_at: 0,
            ok: false,
        }
    }

    /// Overwrites the 24h range when the OHLC series yielded one.
    pub fn apply_range(&mut self, range: OhlcRange) {
        if range.found {
            self.high_24h = range.high;
            self.low_24h = range.low;
        }
    }

    pub fn has_range(&self) -> bool {
        self.high_24h > 0.0 && self.low_24h > 0.0
    }

    pub fn market_cap_to_volume(&self) -> Option<f64> {
        (self.market_cap > 0.0 && self.volume_24h > 0.0)
            .then(|| self.market_cap / self.volume_24h)
    }

    pub fn display_symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or("N/A")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }
}

impl Default for CoinRecord {
    fn default() -> Self {
        Self::empty(DEFAULT_CURRENCY)
    }
}

/// Ranked listing parsed from the markets endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinCollection {
    coins: Vec<CoinRecord>,
    count: usize,
    ok: bool,
}

impl CoinCollection {
    pub fn new(coins: Vec<CoinRecord>) -> Self {
        Self {
            count: coins.len(),
            coins,
            ok: true,
        }
    }

    pub fn failed() -> Self {
        Self {
            coins: Vec::new(),
            count: 0,
            ok: false,
        }
    }

    pub fn coins(&self) -> &[CoinRecord] {
        &self.coins
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub const fn ok(&self) -> bool {
        self.ok
    }
}

/// High/low extrema aggregated over an OHLC candle series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OhlcRange {
    pub high: f64,
    pub low: f64,
    pub found: bool,
}

impl OhlcRange {
    pub const fn not_found() -> Self {
        Self {
            high: 0.0,
            low: 0.0,
            found: false,
        }
    }
}

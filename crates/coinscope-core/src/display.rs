//! Presentation policy shared by every renderer: magnitude scaling, price
//! precision and currency notation. Pure functions, no I/O.

use std::fmt::{Display, Formatter};

/// Magnitude tier chosen for a large amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Trillion,
    Billion,
    Million,
    Unit,
}

impl Magnitude {
    pub const fn divisor(self) -> f64 {
        match self {
            Self::Trillion => 1e12,
            Self::Billion => 1e9,
            Self::Million => 1e6,
            Self::Unit => 1.0,
        }
    }

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Trillion => "T",
            Self::Billion => "B",
            Self::Million => "M",
            Self::Unit => "",
        }
    }
}

/// An amount divided down to its tier; displays with two decimals and the suffix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledAmount {
    pub value: f64,
    pub magnitude: Magnitude,
}

impl ScaledAmount {
    fn new(raw: f64, magnitude: Magnitude) -> Self {
        Self {
            value: raw / magnitude.divisor(),
            magnitude,
        }
    }
}

impl Display for ScaledAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}{}", self.value, self.magnitude.suffix())
    }
}

/// Market caps scale through T, B and M.
pub fn scale_market_cap(value: f64) -> ScaledAmount {
    let magnitude = if value >= 1e12 {
        Magnitude::Trillion
    } else if value >= 1e9 {
        Magnitude::Billion
    } else if value >= 1e6 {
        Magnitude::Million
    } else {
        Magnitude::Unit
    };
    ScaledAmount::new(value, magnitude)
}

/// Volumes stop at B: a 2.5e12 volume reads `2500.00B`.
pub fn scale_volume(value: f64) -> ScaledAmount {
    let magnitude = if value >= 1e9 {
        Magnitude::Billion
    } else if value >= 1e6 {
        Magnitude::Million
    } else {
        Magnitude::Unit
    };
    ScaledAmount::new(value, magnitude)
}

/// Decimal places for a price in the ranking table.
pub fn price_decimals(price: f64) -> usize {
    if price >= 1.0 {
        2
    } else if price >= 0.01 {
        4
    } else {
        6
    }
}

/// How amounts in a given quote currency are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyStyle {
    /// `$1234.56` for every amount.
    Prefix { symbol: &'static str },
    /// `¥9876543` for the spot price; other amounts fall back to `1234.56 jpy`.
    WholePrefix {
        symbol: &'static str,
        code: String,
    },
    /// `1234.56 chf`
    Suffix { code: String },
}

impl CurrencyStyle {
    pub fn for_currency(code: &str) -> Self {
        let code = code.to_ascii_lowercase();
        match code.as_str() {
            "usd" => Self::Prefix { symbol: "$" },
            "eur" => Self::Prefix { symbol: "€" },
            "gbp" => Self::Prefix { symbol: "£" },
            "jpy" | "cny" => Self::WholePrefix { symbol: "¥", code },
            "krw" => Self::WholePrefix { symbol: "₩", code },
            _ => Self::Suffix { code },
        }
    }

    /// Spot price, honouring zero-decimal currencies.
    pub fn price(&self, value: f64) -> String {
        match self {
            Self::Prefix { symbol } => format!("{symbol}{value:.2}"),
            Self::WholePrefix { symbol, .. } => format!("{symbol}{value:.0}"),
            Self::Suffix { code } => format!("{value:.2} {code}"),
        }
    }

    /// Any already-formatted amount (`"1.50B"`, `"42.00"`) with the currency attached.
    pub fn amount(&self, formatted: impl Display) -> String {
        match self {
            Self::Prefix { symbol } => format!("{symbol}{formatted}"),
            Self::WholePrefix { code, .. } | Self::Suffix { code } => {
                format!("{formatted} {code}")
            }
        }
    }

    /// Signed amount. Gains carry a leading `+`; losses keep the minus on the
    /// number itself (`$-12.30`, `-0.50 chf`).
    pub fn signed_amount(&self, value: f64) -> String {
        let sign = if value >= 0.0 { "+" } else { "" };
        format!("{sign}{}", self.amount(format!("{value:.2}")))
    }
}

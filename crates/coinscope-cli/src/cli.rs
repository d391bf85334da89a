//! CLI argument definitions for coinscope.
//!
//! The surface is positional rather than subcommand-based:
//!
//! | Invocation | Description |
//! |------------|-------------|
//! | `coinscope <symbol>` | Full detail block (USD) |
//! | `coinscope <symbol> price` | Price only |
//! | `coinscope <symbol> <currency>` | Full detail quoted in another currency |
//! | `coinscope top [N]` | Top N coins by market cap (1-250, default 10) |
//!
//! # Examples
//!
//! ```bash
//! coinscope btc
//! coinscope ethereum price
//! coinscope sol eur
//! coinscope top 25 --format json
//! ```

use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser, ValueEnum};

use coinscope_core::{validate_top_limit, ValidationError, DEFAULT_TOP_LIMIT};

const TOP_COMMAND: &str = "top";
const PRICE_MODIFIER: &str = "price";

/// Cryptocurrency prices from the CoinGecko public API.
#[derive(Debug, Parser)]
#[command(
    name = "coinscope",
    version,
    about = "Cryptocurrency prices from the CoinGecko public API",
    disable_version_flag = true,
    arg_required_else_help = true,
    allow_negative_numbers = true,
    after_help = "Examples:\n  \
coinscope bitcoin        Show full info for Bitcoin\n  \
coinscope btc price      Show only the price for Bitcoin\n  \
coinscope bitcoin EUR    Show Bitcoin price in EUR\n  \
coinscope top            Show top 10 cryptocurrencies\n  \
coinscope top 20         Show top 20 cryptocurrencies"
)]
pub struct Cli {
    /// Coin ticker or CoinGecko id, or `top` for the market-cap ranking.
    #[arg(value_name = "SYMBOL|top")]
    pub target: String,

    /// `price`, a quote currency (EUR, GBP, JPY, ...), or N for `top`.
    #[arg(value_name = "price|CURRENCY|N")]
    pub modifier: Option<String>,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal layout.
    Text,
    /// Pretty-printed JSON records.
    Json,
}

/// What a coin lookup should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinView {
    Full,
    PriceOnly,
}

/// Positional arguments resolved into a concrete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Coin {
        symbol: String,
        view: CoinView,
        currency: Option<String>,
    },
    Top {
        limit: u16,
    },
}

impl Cli {
    /// Clap command with `-v`/`--version` in place of clap's `-V`.
    pub fn command_with_version_flag() -> clap::Command {
        Self::command().arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        )
    }

    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse_args_from(std::env::args_os())
    }

    pub fn try_parse_args_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command_with_version_flag().try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    pub fn invocation(&self) -> Result<Invocation, ValidationError> {
        if self.target == TOP_COMMAND {
            if !self.extra.is_empty() {
                return Err(ValidationError::TooManyArguments {
                    command: TOP_COMMAND,
                });
            }
            let limit = match self.modifier.as_deref() {
                Some(raw) => parse_limit(raw)?,
                None => DEFAULT_TOP_LIMIT,
            };
            return Ok(Invocation::Top { limit });
        }

        if !self.extra.is_empty() {
            return Err(ValidationError::TooManyArguments { command: "lookup" });
        }

        let (view, currency) = match self.modifier.as_deref() {
            Some(modifier) if modifier.eq_ignore_ascii_case(PRICE_MODIFIER) => {
                (CoinView::PriceOnly, None)
            }
            Some(currency) => (CoinView::Full, Some(currency.to_ascii_lowercase())),
            None => (CoinView::Full, None),
        };

        Ok(Invocation::Coin {
            symbol: self.target.clone(),
            view,
            currency,
        })
    }
}

fn parse_limit(raw: &str) -> Result<u16, ValidationError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidLimit {
            value: raw.to_owned(),
        })?;
    validate_top_limit(value)
}

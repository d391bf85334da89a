//! Terminal and JSON rendering for command output.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use coinscope_core::{
    price_decimals, scale_market_cap, scale_volume, CoinCollection, CoinRecord, CurrencyStyle,
};

use crate::cli::{CoinView, OutputFormat};
use crate::commands::CommandOutput;
use crate::error::CliError;

const DETAIL_RULE_WIDTH: usize = 52;
const TABLE_RULE_WIDTH: usize = 104;
const NAME_COLUMN_MAX: usize = 19;
const NAME_TRUNCATE_AT: usize = 16;
const LABEL_WIDTH: usize = 19;
const STAMP_LABEL_WIDTH: usize = 20;

pub fn render(output: &CommandOutput, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let payload = match output {
                CommandOutput::Coin { record, .. } => serde_json::to_string_pretty(record)?,
                CommandOutput::Top(markets) => serde_json::to_string_pretty(markets)?,
            };
            Ok(format!("{payload}\n"))
        }
        OutputFormat::Text => {
            let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
            match output {
                CommandOutput::Coin {
                    record,
                    view: CoinView::Full,
                } => render_full_info(record, offset),
                CommandOutput::Coin {
                    record,
                    view: CoinView::PriceOnly,
                } => render_price_only(record),
                CommandOutput::Top(markets) => render_top(markets),
            }
        }
    }
}

/// Framed detail block; rows for absent data are omitted.
pub fn render_full_info(record: &CoinRecord, offset: UtcOffset) -> Result<String, CliError> {
    ensure_ok(record)?;
    let style = CurrencyStyle::for_currency(&record.currency);
    let rule = "━".repeat(DETAIL_RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    push_line(&mut out, &rule);
    push_line(
        &mut out,
        &format!("  {} ({})", record.display_name(), record.display_symbol()),
    );
    push_line(&mut out, &rule);

    push_row(&mut out, "Current Price", &style.price(record.current_price));

    if record.price_change_24h != 0.0 {
        let arrow = trend_arrow(record.price_change_24h);
        push_row(
            &mut out,
            "24h Change",
            &format!(
                "{} ({arrow}{:.2}%)",
                style.signed_amount(record.price_change_24h),
                record.price_change_pct_24h
            ),
        );
    }

    if record.has_range() {
        push_row(&mut out, "24h High", &style.amount(format!("{:.2}", record.high_24h)));
        push_row(&mut out, "24h Low", &style.amount(format!("{:.2}", record.low_24h)));
    }

    if record.market_cap > 0.0 {
        push_row(&mut out, "Market Cap", &style.amount(scale_market_cap(record.market_cap)));
    }
    if record.volume_24h > 0.0 {
        push_row(&mut out, "24h Volume", &style.amount(scale_volume(record.volume_24h)));
    }
    if let Some(ratio) = record.market_cap_to_volume() {
        push_row(&mut out, "Market Cap / Volume", &format!("{ratio:.2}"));
    }

    if record.last_updated_at > 0 {
        if let Some(stamp) = format_timestamp(record.last_updated_at, offset) {
            push_padded_row(&mut out, "Last Updated", STAMP_LABEL_WIDTH, &stamp);
        }
    }

    push_line(&mut out, &rule);
    out.push('\n');
    Ok(out)
}

pub fn render_price_only(record: &CoinRecord) -> Result<String, CliError> {
    ensure_ok(record)?;
    let style = CurrencyStyle::for_currency(&record.currency);
    Ok(format!("{}\n", style.price(record.current_price)))
}

/// Ranked table; price precision follows the coin's magnitude.
pub fn render_top(markets: &CoinCollection) -> Result<String, CliError> {
    if !markets.ok() || markets.count() == 0 {
        return Err(CliError::Command(String::from(
            "failed to retrieve top cryptocurrencies data",
        )));
    }

    let rule = "━".repeat(TABLE_RULE_WIDTH);
    let mut out = String::new();

    out.push('\n');
    push_line(&mut out, &rule);
    push_line(
        &mut out,
        &format!("  Top {} Cryptocurrencies by Market Cap", markets.count()),
    );
    push_line(&mut out, &rule);
    push_line(
        &mut out,
        &table_row(
            "Rank",
            "Symbol",
            "Name",
            "Price",
            "Market Cap",
            "24h Volume",
            "24h Change",
        ),
    );
    push_line(&mut out, &rule);

    for (index, coin) in markets.coins().iter().enumerate() {
        if !coin.ok {
            continue;
        }
        let style = CurrencyStyle::for_currency(&coin.currency);
        let decimals = price_decimals(coin.current_price);
        let pct = coin.price_change_pct_24h;
        let sign = if pct >= 0.0 { "+" } else { "" };

        push_line(
            &mut out,
            &table_row(
                &(index + 1).to_string(),
                coin.display_symbol(),
                &truncate_name(coin.display_name()),
                &style.amount(format!("{:.decimals$}", coin.current_price)),
                &style.amount(scale_market_cap(coin.market_cap)),
                &style.amount(scale_volume(coin.volume_24h)),
                &format!("{}{sign}{pct:.2}%", trend_arrow(pct)),
            ),
        );
    }

    push_line(&mut out, &rule);
    out.push('\n');
    Ok(out)
}

fn ensure_ok(record: &CoinRecord) -> Result<(), CliError> {
    if record.ok {
        Ok(())
    } else {
        Err(CliError::Command(String::from(
            "failed to retrieve cryptocurrency data",
        )))
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_row(out: &mut String, label: &str, value: &str) {
    push_padded_row(out, label, LABEL_WIDTH, value);
}

fn push_padded_row(out: &mut String, label: &str, width: usize, value: &str) {
    out.push_str(&format!("  {:<width$} {value}\n", format!("{label}:")));
}

fn table_row(
    rank: &str,
    symbol: &str,
    name: &str,
    price: &str,
    market_cap: &str,
    volume: &str,
    change: &str,
) -> String {
    format!("  {rank:<4} {symbol:<8} {name:<20} {price:<12} {market_cap:<15} {volume:<15} {change:<10}")
        .trim_end()
        .to_owned()
}

fn trend_arrow(value: f64) -> &'static str {
    if value >= 0.0 {
        "↑"
    } else {
        "↓"
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_COLUMN_MAX {
        let head: String = name.chars().take(NAME_TRUNCATE_AT).collect();
        format!("{head}...")
    } else {
        name.to_owned()
    }
}

fn format_timestamp(seconds: i64, offset: UtcOffset) -> Option<String> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::from_unix_timestamp(seconds)
        .ok()?
        .checked_to_offset(offset)?
        .format(format)
        .ok()
}

//! Ticker ↔ canonical ID mapping.
//!
//! Both lookup directions are built once from [`KNOWN_COINS`] and never
//! mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Well-known tickers and their CoinGecko IDs.
pub const KNOWN_COINS: [(&str, &str); 26] = [
    ("BTC", "bitcoin"),
    ("ETH", "ethereum"),
    ("BNB", "binancecoin"),
    ("SOL", "solana"),
    ("ADA", "cardano"),
    ("XRP", "ripple"),
    ("DOT", "polkadot"),
    ("DOGE", "dogecoin"),
    ("AVAX", "avalanche-2"),
    ("MATIC", "matic-network"),
    ("LINK", "chainlink"),
    ("UNI", "uniswap"),
    ("LTC", "litecoin"),
    ("ATOM", "cosmos"),
    ("ETC", "ethereum-classic"),
    ("XLM", "stellar"),
    ("ALGO", "algorand"),
    ("FIL", "filecoin"),
    ("TRX", "tron"),
    ("VET", "vechain"),
    ("ICP", "internet-computer"),
    ("THETA", "theta-token"),
    ("EOS", "eos"),
    ("AAVE", "aave"),
    ("MKR", "maker"),
    ("SUSHI", "sushi"),
];

// Keyed by uppercase ticker.
static TICKER_TO_ID: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| KNOWN_COINS.iter().copied().collect());

static ID_TO_TICKER: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    KNOWN_COINS
        .iter()
        .map(|&(ticker, id)| (id, ticker))
        .collect()
});

/// Maps a user ticker to the API's canonical ID.
///
/// Lookup is case-insensitive. Unknown input is returned lowercased on the
/// assumption that the user already typed an ID (`"bitcoin"`, `"pepe"`).
pub fn resolve(ticker: &str) -> String {
    let upper = ticker.to_ascii_uppercase();
    match TICKER_TO_ID.get(upper.as_str()) {
        Some(id) => (*id).to_owned(),
        None => ticker.to_lowercase(),
    }
}

/// Reverse lookup; `id` must match exactly.
pub fn ticker_for_id(id: &str) -> Option<&'static str> {
    ID_TO_TICKER.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_tickers_case_insensitively() {
        assert_eq!(resolve("btc"), "bitcoin");
        assert_eq!(resolve("BTC"), "bitcoin");
        assert_eq!(resolve("Avax"), "avalanche-2");
    }

    #[test]
    fn falls_back_to_lowercased_input() {
        assert_eq!(resolve("unknownxyz"), "unknownxyz");
        assert_eq!(resolve("Shiba-Inu"), "shiba-inu");
        assert_eq!(resolve(""), "");
    }

    #[test]
    fn reverse_table_matches_forward_table() {
        for (ticker, id) in KNOWN_COINS {
            assert_eq!(resolve(ticker), id);
            assert_eq!(ticker_for_id(id), Some(ticker));
        }
        assert_eq!(ticker_for_id("Bitcoin"), None);
    }
}

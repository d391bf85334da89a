use coinscope_core::{
    derive_name, parse_markets, parse_ohlc, parse_single_price, resolve, scale_market_cap,
    CoinRecord, Magnitude,
};

const SIMPLE_PRICE_CASES: [(&str, &str); 4] = [
    ("bitcoin", "usd"),
    ("ethereum", "eur"),
    ("internet-computer", "gbp"),
    ("some-new-token", "jpy"),
];

fn simple_price_payload(id: &str, currency: &str) -> String {
    format!(
        r#"{{"{id}":{{"{currency}":1.25,"{currency}_market_cap":2000000.0,
        "{currency}_24h_vol":1500.0,"{currency}_24h_change":0.5,"last_updated_at":1711111111}}}}"#
    )
}

#[test]
fn single_price_reports_key_and_currency_for_every_shape() {
    for (id, currency) in SIMPLE_PRICE_CASES {
        let payload = simple_price_payload(id, currency);
        let record = parse_single_price(payload.as_bytes(), currency);

        assert!(record.ok, "{id}/{currency}: ok");
        assert_eq!(record.id.as_deref(), Some(id), "{id}/{currency}: id");
        assert_eq!(record.currency, currency, "{id}/{currency}: currency");
        assert_eq!(record.current_price, 1.25, "{id}/{currency}: price");
        assert_eq!(record.market_cap, 2_000_000.0, "{id}/{currency}: market cap");
        assert_eq!(record.volume_24h, 1500.0, "{id}/{currency}: volume");
        assert_eq!(record.last_updated_at, 1_711_111_111, "{id}/{currency}: updated");
    }
}

#[test]
fn single_price_rejects_empty_object() {
    assert!(!parse_single_price(b"{}", "usd").ok);
}

#[test]
fn single_price_rejects_invalid_json_and_keeps_currency_only() {
    let record = parse_single_price(b"<html>rate limited</html>", "usd");

    assert!(!record.ok);
    assert_eq!(record, CoinRecord::empty("usd"));
    assert!(record.id.is_none() && record.symbol.is_none() && record.name.is_none());
}

#[test]
fn ohlc_aggregates_extrema_across_rows() {
    let range = parse_ohlc(b"[[0,0,10,5,0],[0,0,20,3,0],[0,0,8,7,0]]");

    assert!(range.found);
    assert_eq!(range.high, 20.0);
    assert_eq!(range.low, 3.0);
}

#[test]
fn ohlc_empty_series_is_not_found() {
    assert!(!parse_ohlc(b"[]").found);
}

#[test]
fn markets_derives_absolute_change() {
    let markets = parse_markets(
        br#"[{"id":"x","current_price":100,"price_change_percentage_24h":5}]"#,
        1,
    );
    assert_eq!(markets.coins()[0].price_change_24h, 5.0);
}

#[test]
fn markets_limit_clamps_to_array_length() {
    let markets = parse_markets(br#"[{"id":"a"},{"id":"b"},{"id":"c"}]"#, 10);

    assert!(markets.ok());
    assert_eq!(markets.count(), 3);
}

#[test]
fn resolver_contract() {
    assert_eq!(resolve("btc"), "bitcoin");
    assert_eq!(resolve("BTC"), "bitcoin");
    assert_eq!(resolve("unknownxyz"), "unknownxyz");
}

#[test]
fn name_derivation_contract() {
    assert_eq!(derive_name("internet-computer"), "Internet Computer");
    assert_eq!(derive_name("eos"), "Eos");
}

#[test]
fn scale_formatting_contract() {
    assert_eq!(scale_market_cap(1.5e9).to_string(), "1.50B");

    let small = scale_market_cap(999.0);
    assert_eq!(small.magnitude, Magnitude::Unit);
    assert_eq!(small.value, 999.0);
}

#[test]
fn reparsing_is_deterministic() {
    let payload = simple_price_payload("cardano", "usd");
    assert_eq!(
        parse_single_price(payload.as_bytes(), "usd"),
        parse_single_price(payload.as_bytes(), "usd")
    );

    let ohlc = b"[[0,1,2,0.5,1],[0,1,3,0.25,1]]";
    assert_eq!(parse_ohlc(ohlc), parse_ohlc(ohlc));

    let listing = br#"[{"id":"solana","symbol":"sol","current_price":150.5,
        "price_change_percentage_24h":-2.0,"last_updated":"2024-03-01T12:00:00Z"}]"#;
    assert_eq!(parse_markets(listing, 5), parse_markets(listing, 5));
}

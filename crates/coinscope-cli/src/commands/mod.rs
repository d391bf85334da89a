mod coin;
mod top;

use coinscope_core::{CoinCollection, CoinGeckoClient, CoinRecord};

use crate::cli::{CoinView, Invocation};
use crate::error::CliError;

/// Data produced by a command, ready for the renderer.
#[derive(Debug)]
pub enum CommandOutput {
    Coin { record: CoinRecord, view: CoinView },
    Top(CoinCollection),
}

pub async fn run(
    invocation: &Invocation,
    client: &CoinGeckoClient,
) -> Result<CommandOutput, CliError> {
    match invocation {
        Invocation::Coin {
            symbol,
            view,
            currency,
        } => coin::run(client, symbol, currency.as_deref(), *view).await,
        Invocation::Top { limit } => top::run(client, *limit).await,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use coinscope_core::{ClientConfig, HttpResponse, StubHttpClient};

    use super::*;

    fn client(stub: StubHttpClient) -> CoinGeckoClient {
        let config = ClientConfig::default().with_base_url("https://api.test/api/v3");
        CoinGeckoClient::new(Arc::new(stub), &config)
    }

    #[tokio::test]
    async fn price_only_lookup_keeps_the_view() {
        let client = client(
            StubHttpClient::new()
                .route(
                    "/simple/price",
                    HttpResponse::ok_json(r#"{"bitcoin":{"usd":64000.5}}"#),
                )
                .route("/ohlc", HttpResponse::ok_json("[]")),
        );
        let invocation = Invocation::Coin {
            symbol: String::from("btc"),
            view: CoinView::PriceOnly,
            currency: None,
        };

        let output = run(&invocation, &client).await.expect("command succeeds");
        match output {
            CommandOutput::Coin { record, view } => {
                assert_eq!(view, CoinView::PriceOnly);
                assert_eq!(record.current_price, 64000.5);
            }
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_listing_is_reported() {
        let client = client(
            StubHttpClient::new().route("/coins/markets", HttpResponse::ok_json("[]")),
        );

        let error = run(&Invocation::Top { limit: 5 }, &client)
            .await
            .expect_err("empty listing fails");
        assert!(matches!(error, CliError::Command(_)));
        assert_eq!(error.exit_code(), 1);
    }

    #[tokio::test]
    async fn not_found_surfaces_as_core_error() {
        let client = client(StubHttpClient::new().route(
            "/simple/price",
            HttpResponse::ok_json(r#"{"error":"coin not found"}"#),
        ));
        let invocation = Invocation::Coin {
            symbol: String::from("nope"),
            view: CoinView::Full,
            currency: None,
        };

        let error = run(&invocation, &client).await.expect_err("lookup fails");
        assert!(matches!(error, CliError::Core(_)));
    }
}

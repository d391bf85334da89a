use tracing::debug;

use coinscope_core::CoinGeckoClient;

use crate::cli::CoinView;
use crate::error::CliError;

use super::CommandOutput;

pub async fn run(
    client: &CoinGeckoClient,
    symbol: &str,
    currency: Option<&str>,
    view: CoinView,
) -> Result<CommandOutput, CliError> {
    let record = client.coin_detail(symbol, currency).await?;
    debug!(
        id = record.id.as_deref().unwrap_or_default(),
        has_range = record.has_range(),
        "coin lookup complete"
    );

    Ok(CommandOutput::Coin { record, view })
}

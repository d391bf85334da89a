use coinscope_core::CoinGeckoClient;

use crate::error::CliError;

use super::CommandOutput;

pub async fn run(client: &CoinGeckoClient, limit: u16) -> Result<CommandOutput, CliError> {
    let markets = client.top_coins(limit).await?;
    if markets.count() == 0 {
        return Err(CliError::Command(String::from(
            "failed to retrieve top cryptocurrencies data: listing is empty",
        )));
    }

    Ok(CommandOutput::Top(markets))
}

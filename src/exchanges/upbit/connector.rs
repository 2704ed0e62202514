use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::upbit::auth;
use crate::exchanges::upbit::types::{UpbitAccount, UpbitMarket, UpbitTicker};
use tracing::instrument;

pub const UPBIT_HOST: &str = "https://api.upbit.com/v1";

/// Read-only Upbit client.
///
/// Public endpoints are plain GETs; `/accounts` attaches a freshly signed
/// bearer token per request. Failures are classified by the transport.
pub struct UpbitConnector<R: RestClient> {
    rest: R,
    config: ExchangeConfig,
}

impl<R: RestClient + Clone> Clone for UpbitConnector<R> {
    fn clone(&self) -> Self {
        Self {
            rest: self.rest.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R: RestClient> UpbitConnector<R> {
    pub fn new(rest: R, config: ExchangeConfig) -> Self {
        Self { rest, config }
    }

    pub fn can_authenticate(&self) -> bool {
        self.config.has_credentials()
    }

    /// Every listed market.
    #[instrument(skip(self))]
    pub async fn market_list(&self) -> Result<Vec<UpbitMarket>, ExchangeError> {
        self.rest.get_json("/market/all", "", &[]).await
    }

    /// Ticker snapshots for the given markets query, e.g.
    /// `markets=KRW-BTC,KRW-ETH`.
    #[instrument(skip(self))]
    pub async fn tickers(&self, markets_query: &str) -> Result<Vec<UpbitTicker>, ExchangeError> {
        self.rest.get_json("/ticker", markets_query, &[]).await
    }

    /// Account balances for the configured credentials.
    #[instrument(skip(self))]
    pub async fn accounts(&self) -> Result<Vec<UpbitAccount>, ExchangeError> {
        let token = auth::bearer_token(self.config.api_key(), self.config.secret_key())?;
        self.rest
            .get_json("/accounts", "", &[("Authorization", token)])
            .await
    }
}

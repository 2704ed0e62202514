use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClient};
use crate::core::response::ApiResponse;
use crate::exchanges::binance::types::{FuturesAccount, PriceTicker, SpotAsset};
use crate::exchanges::binance::{self, BinanceConnector};
use crate::exchanges::upbit::types::{UpbitAccount, UpbitMarket, UpbitTicker};
use crate::exchanges::upbit::{self, UpbitConnector};
use tokio::task::JoinError;
use tracing::instrument;

/// Spot asset list and futures account fetched as one paired query.
///
/// Each leg is captured independently: one leg failing never hides the other
/// leg's result. Legs stay `Option` so a partially populated overview can be
/// represented while results trickle in on the consumer side.
#[derive(Debug)]
pub struct AssetOverview {
    pub market: Option<ApiResponse<Vec<SpotAsset>>>,
    pub future: Option<ApiResponse<FuturesAccount>>,
}

/// Spot and futures price tickers fetched as one paired query.
#[derive(Debug)]
pub struct PriceOverview {
    pub market: Vec<PriceTicker>,
    pub future: Vec<PriceTicker>,
}

/// Facade over both venues, constructed once per caller with explicit
/// credentials. There is no process-wide credential state: reconfiguration
/// means building a new client.
pub struct TombitClient<R: RestClient = ReqwestRest> {
    binance: BinanceConnector<R>,
    upbit: UpbitConnector<R>,
}

impl TombitClient<ReqwestRest> {
    /// Build a client against the production hosts.
    pub fn new(
        binance_config: ExchangeConfig,
        upbit_config: ExchangeConfig,
    ) -> Result<Self, ExchangeError> {
        Ok(Self {
            binance: binance::build_connector(binance_config)?,
            upbit: upbit::build_connector(upbit_config)?,
        })
    }
}

impl<R: RestClient> TombitClient<R> {
    /// Build a client from pre-assembled connectors (tests inject stub
    /// transports through this).
    pub fn with_connectors(binance: BinanceConnector<R>, upbit: UpbitConnector<R>) -> Self {
        Self { binance, upbit }
    }

    pub fn binance(&self) -> &BinanceConnector<R> {
        &self.binance
    }

    pub fn upbit(&self) -> &UpbitConnector<R> {
        &self.upbit
    }

    /// Paired spot + futures balance query, best-effort policy.
    ///
    /// Both legs are dispatched concurrently and both outcomes are always
    /// returned, each wrapped in a fresh identity-bearing response.
    #[instrument(skip(self))]
    pub async fn binance_asset_overview(&self) -> AssetOverview {
        let (market, future) = tokio::join!(
            self.binance.spot_asset_list(),
            self.binance.futures_account()
        );

        AssetOverview {
            market: Some(ApiResponse::new(market)),
            future: Some(ApiResponse::new(future)),
        }
    }

    pub async fn binance_spot_prices(&self) -> Result<Vec<PriceTicker>, ExchangeError> {
        self.binance.spot_price_tickers().await
    }

    pub async fn binance_futures_prices(&self) -> Result<Vec<PriceTicker>, ExchangeError> {
        self.binance.futures_price_tickers().await
    }

    pub async fn upbit_markets(&self) -> Result<Vec<UpbitMarket>, ExchangeError> {
        self.upbit.market_list().await
    }

    pub async fn upbit_tickers(&self, markets_query: &str) -> Result<Vec<UpbitTicker>, ExchangeError> {
        self.upbit.tickers(markets_query).await
    }

    pub async fn upbit_accounts(&self) -> Result<Vec<UpbitAccount>, ExchangeError> {
        self.upbit.accounts().await
    }
}

impl<R> TombitClient<R>
where
    R: RestClient + Clone + Send + Sync + 'static,
{
    /// Paired spot + futures price query, fail-fast policy.
    ///
    /// Both legs start as independent tasks before either is awaited. The
    /// first leg observed to fail short-circuits the call; the sibling task
    /// is not cancelled, its eventual result is simply discarded. When both
    /// legs succeed, results are read in fixed order, market before future.
    #[instrument(skip(self))]
    pub async fn binance_price_overview(&self) -> Result<PriceOverview, ExchangeError> {
        let market_leg = self.binance.clone();
        let future_leg = self.binance.clone();

        let mut market_task = tokio::spawn(async move { market_leg.spot_price_tickers().await });
        let mut future_task = tokio::spawn(async move { future_leg.futures_price_tickers().await });

        // Whichever leg completes first is inspected first; a failure there
        // returns before the sibling is awaited at all.
        let (first_was_market, first) = tokio::select! {
            joined = &mut market_task => (true, leg_outcome(joined)?),
            joined = &mut future_task => (false, leg_outcome(joined)?),
        };

        let (market, future) = if first_was_market {
            (first, leg_outcome(future_task.await)?)
        } else {
            (leg_outcome(market_task.await)?, first)
        };

        Ok(PriceOverview { market, future })
    }
}

fn leg_outcome<T>(joined: Result<Result<T, ExchangeError>, JoinError>) -> Result<T, ExchangeError> {
    joined.map_err(|e| ExchangeError::Other(format!("aggregation leg panicked: {}", e)))?
}

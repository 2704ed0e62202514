use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::binance::signer::{self, SecurityMode};
use crate::exchanges::binance::types::{ExchangeInfo, FuturesAccount, PriceTicker, SpotAsset};
use serde::de::DeserializeOwned;
use tracing::instrument;

pub const SPOT_HOST: &str = "https://api.binance.com";
pub const FUTURES_HOST: &str = "https://fapi.binance.com";

/// Which of the two Binance hosts an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketSegment {
    Spot,
    Futures,
}

/// Read-only Binance client over the spot and futures hosts.
///
/// Every exposed operation is a fixed (path, segment, timestamp flag,
/// security mode) tuple funneled through one `perform` call: build the
/// signed query, pick the host, attach the API key header, GET, decode.
/// No retries, no caching.
pub struct BinanceConnector<R: RestClient> {
    spot: R,
    futures: R,
    config: ExchangeConfig,
}

impl<R: RestClient + Clone> Clone for BinanceConnector<R> {
    fn clone(&self) -> Self {
        Self {
            spot: self.spot.clone(),
            futures: self.futures.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R: RestClient> BinanceConnector<R> {
    pub fn new(spot: R, futures: R, config: ExchangeConfig) -> Self {
        Self {
            spot,
            futures,
            config,
        }
    }

    pub fn can_authenticate(&self) -> bool {
        self.config.has_credentials()
    }

    fn user_data(&self) -> SecurityMode {
        SecurityMode::UserData {
            secret: self.config.secret_key().to_string(),
        }
    }

    // `security` is skipped so signing secrets never reach the logs.
    #[instrument(skip(self, security))]
    async fn perform<T: DeserializeOwned>(
        &self,
        segment: MarketSegment,
        path: &str,
        raw_query: &str,
        needs_timestamp: bool,
        security: SecurityMode,
    ) -> Result<T, ExchangeError> {
        let payload =
            signer::build_signed_query(raw_query, needs_timestamp, &security, signer::get_timestamp()?);

        let rest = match segment {
            MarketSegment::Spot => &self.spot,
            MarketSegment::Futures => &self.futures,
        };

        // The API key header goes on every call, public endpoints included.
        let headers = [("X-MBX-APIKEY", self.config.api_key().to_string())];
        rest.get_json(path, &payload, &headers).await
    }

    /// Spot exchange information (listed symbols).
    pub async fn spot_exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        self.perform(
            MarketSegment::Spot,
            "/api/v1/exchangeInfo",
            "",
            false,
            SecurityMode::None,
        )
        .await
    }

    /// Futures exchange information (listed symbols).
    pub async fn futures_exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        self.perform(
            MarketSegment::Futures,
            "/fapi/v1/exchangeInfo",
            "",
            false,
            SecurityMode::None,
        )
        .await
    }

    /// Spot asset list for the configured account.
    pub async fn spot_asset_list(&self) -> Result<Vec<SpotAsset>, ExchangeError> {
        let security = self.user_data();
        self.perform(
            MarketSegment::Spot,
            "/sapi/v1/capital/config/getall",
            "",
            true,
            security,
        )
        .await
    }

    /// Futures account snapshot for the configured account.
    pub async fn futures_account(&self) -> Result<FuturesAccount, ExchangeError> {
        let security = self.user_data();
        self.perform(MarketSegment::Futures, "/fapi/v2/account", "", true, security)
            .await
    }

    /// Price tickers for every spot symbol.
    pub async fn spot_price_tickers(&self) -> Result<Vec<PriceTicker>, ExchangeError> {
        self.perform(
            MarketSegment::Spot,
            "/api/v3/ticker/price",
            "",
            false,
            SecurityMode::MarketData,
        )
        .await
    }

    /// Price tickers for every futures symbol.
    pub async fn futures_price_tickers(&self) -> Result<Vec<PriceTicker>, ExchangeError> {
        self.perform(
            MarketSegment::Futures,
            "/fapi/v1/ticker/price",
            "",
            false,
            SecurityMode::MarketData,
        )
        .await
    }
}

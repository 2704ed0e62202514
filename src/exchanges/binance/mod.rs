pub mod connector;
pub mod signer;
pub mod types;

use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientConfig};

pub use connector::{BinanceConnector, MarketSegment, FUTURES_HOST, SPOT_HOST};
pub use signer::{SecurityMode, RECV_WINDOW_MS};

/// Create a Binance connector backed by one transport per host.
pub fn build_connector(
    config: ExchangeConfig,
) -> Result<BinanceConnector<ReqwestRest>, ExchangeError> {
    let spot = ReqwestRest::new(RestClientConfig::new(
        SPOT_HOST.to_string(),
        "binance-spot".to_string(),
    ))?;
    let futures = ReqwestRest::new(RestClientConfig::new(
        FUTURES_HOST.to_string(),
        "binance-futures".to_string(),
    ))?;

    Ok(BinanceConnector::new(spot, futures, config))
}

pub mod auth;
pub mod connector;
pub mod types;

use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientConfig};

pub use auth::AuthClaims;
pub use connector::{UpbitConnector, UPBIT_HOST};

/// Create an Upbit connector against the production host.
pub fn build_connector(config: ExchangeConfig) -> Result<UpbitConnector<ReqwestRest>, ExchangeError> {
    let rest = ReqwestRest::new(RestClientConfig::new(
        UPBIT_HOST.to_string(),
        "upbit".to_string(),
    ))?;

    Ok(UpbitConnector::new(rest, config))
}

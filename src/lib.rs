//! Read-only dual-exchange client: Binance-style spot/futures plus an
//! Upbit-style spot venue.
//!
//! The interesting parts are the per-venue request signing (HMAC query
//! signing for Binance, signed-claim bearer tokens for Upbit) and the
//! [`TombitClient`] facade, which issues paired spot+futures queries
//! concurrently under an explicit partial-failure policy.

pub mod client;
pub mod core;
pub mod exchanges;

pub use crate::client::{AssetOverview, PriceOverview, TombitClient};
pub use crate::core::config::ExchangeConfig;
pub use crate::core::errors::ExchangeError;
pub use crate::core::response::ApiResponse;
pub use crate::exchanges::binance::BinanceConnector;
pub use crate::exchanges::upbit::UpbitConnector;

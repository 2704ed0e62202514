pub mod binance;
pub mod upbit;

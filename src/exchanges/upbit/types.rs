use serde::Deserialize;

/// Listed market from `/market/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpbitMarket {
    pub market: String,
    pub korean_name: String,
    pub english_name: String,
}

/// Ticker snapshot from `/ticker`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpbitTicker {
    pub market: String,
    pub trade_date: String,
    pub trade_time: String,
    pub trade_date_kst: String,
    pub trade_time_kst: String,
    pub trade_timestamp: i64,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    pub prev_closing_price: f64,
    pub change: String,
    pub change_price: f64,
    pub change_rate: f64,
    pub signed_change_price: f64,
    pub signed_change_rate: f64,
    pub trade_volume: f64,
    pub acc_trade_price: f64,
    pub acc_trade_price_24h: f64,
    pub acc_trade_volume: f64,
    pub acc_trade_volume_24h: f64,
    pub highest_52_week_price: f64,
    pub highest_52_week_date: String,
    pub lowest_52_week_price: f64,
    pub lowest_52_week_date: String,
    pub timestamp: i64,
}

/// Account balance row from `/accounts`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpbitAccount {
    pub currency: String,
    pub balance: String,
    pub locked: String,
    pub avg_buy_price: String,
    pub avg_buy_price_modified: bool,
    pub unit_currency: String,
}

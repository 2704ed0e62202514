use serde::Deserialize;

/// One `symbol -> price` entry from the spot or futures price ticker.
/// Futures tickers additionally carry a `time` field.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceTicker {
    pub symbol: String,
    pub price: String,
    pub time: Option<i64>,
}

/// One asset row from the spot capital configuration list.
#[derive(Debug, Clone, Deserialize)]
pub struct SpotAsset {
    pub coin: String,
    #[serde(rename = "depositAllEnable")]
    pub deposit_all_enable: bool,
    pub free: String,
    pub freeze: String,
    pub ipoable: String,
    pub ipoing: String,
    #[serde(rename = "isLegalMoney")]
    pub is_legal_money: bool,
    pub locked: String,
    pub name: String,
    pub storage: String,
    pub trading: bool,
    #[serde(rename = "withdrawAllEnable")]
    pub withdraw_all_enable: bool,
    pub withdrawing: String,
}

/// Futures account snapshot (`/fapi/v2/account`).
#[derive(Debug, Clone, Deserialize)]
pub struct FuturesAccount {
    #[serde(rename = "feeTier")]
    pub fee_tier: i32,
    #[serde(rename = "canTrade")]
    pub can_trade: bool,
    #[serde(rename = "canDeposit")]
    pub can_deposit: bool,
    #[serde(rename = "canWithdraw")]
    pub can_withdraw: bool,
    #[serde(rename = "updateTime")]
    pub update_time: i64,
    #[serde(rename = "totalInitialMargin")]
    pub total_initial_margin: String,
    #[serde(rename = "totalMaintMargin")]
    pub total_maint_margin: String,
    #[serde(rename = "totalWalletBalance")]
    pub total_wallet_balance: String,
    #[serde(rename = "totalUnrealizedProfit")]
    pub total_unrealized_profit: String,
    #[serde(rename = "totalPositionInitialMargin")]
    pub total_position_initial_margin: String,
    #[serde(rename = "totalOpenOrderInitialMargin")]
    pub total_open_order_initial_margin: String,
    #[serde(rename = "totalCrossWalletBalance")]
    pub total_cross_wallet_balance: String,
    #[serde(rename = "totalCrossUnPnl")]
    pub total_cross_un_pnl: String,
    #[serde(rename = "availableBalance")]
    pub available_balance: String,
    #[serde(rename = "maxWithdrawAmount")]
    pub max_withdraw_amount: String,
    pub assets: Vec<FuturesAsset>,
}

/// Per-asset balances inside a [`FuturesAccount`].
#[derive(Debug, Clone, Deserialize)]
pub struct FuturesAsset {
    pub asset: String,
    #[serde(rename = "walletBalance")]
    pub wallet_balance: String,
    #[serde(rename = "unrealizedProfit")]
    pub unrealized_profit: String,
    #[serde(rename = "marginBalance")]
    pub margin_balance: String,
    #[serde(rename = "maintMargin")]
    pub maint_margin: String,
    #[serde(rename = "initialMargin")]
    pub initial_margin: String,
    #[serde(rename = "positionInitialMargin")]
    pub position_initial_margin: String,
    #[serde(rename = "openOrderInitialMargin")]
    pub open_order_initial_margin: String,
    #[serde(rename = "crossWalletBalance")]
    pub cross_wallet_balance: String,
    #[serde(rename = "crossUnPnl")]
    pub cross_un_pnl: String,
    #[serde(rename = "availableBalance")]
    pub available_balance: String,
    #[serde(rename = "maxWithdrawAmount")]
    pub max_withdraw_amount: String,
    #[serde(rename = "marginAvailable")]
    pub margin_available: bool,
    #[serde(rename = "updateTime")]
    pub update_time: i64,
}

/// Listed symbol, shared by the spot and futures exchange-info endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    pub symbol: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfo {
    pub symbols: Vec<SymbolInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spot_ticker_decodes_without_time() {
        let tickers: Vec<PriceTicker> =
            serde_json::from_str(r#"[{"symbol":"BTCUSDT","price":"6000.01"}]"#).unwrap();
        assert_eq!(tickers[0].symbol, "BTCUSDT");
        assert_eq!(tickers[0].price, "6000.01");
        assert!(tickers[0].time.is_none());
    }

    #[test]
    fn futures_ticker_carries_time() {
        let tickers: Vec<PriceTicker> = serde_json::from_str(
            r#"[{"symbol":"ETHUSDT","price":"1652.30","time":1668315955000}]"#,
        )
        .unwrap();
        assert_eq!(tickers[0].time, Some(1_668_315_955_000));
    }

    #[test]
    fn spot_asset_decodes() {
        let raw = r#"{
            "coin": "BTC",
            "depositAllEnable": true,
            "free": "0.08074558",
            "freeze": "0.00000000",
            "ipoable": "0.00000000",
            "ipoing": "0.00000000",
            "isLegalMoney": false,
            "locked": "0.00000000",
            "name": "Bitcoin",
            "storage": "0.00000000",
            "trading": true,
            "withdrawAllEnable": true,
            "withdrawing": "0.00000000"
        }"#;
        let asset: SpotAsset = serde_json::from_str(raw).unwrap();
        assert_eq!(asset.coin, "BTC");
        assert_eq!(asset.free, "0.08074558");
        assert!(asset.trading);
        assert!(!asset.is_legal_money);
    }

    #[test]
    fn futures_account_decodes_with_assets() {
        let raw = r#"{
            "feeTier": 0,
            "canTrade": true,
            "canDeposit": true,
            "canWithdraw": true,
            "updateTime": 0,
            "totalInitialMargin": "0.00000000",
            "totalMaintMargin": "0.00000000",
            "totalWalletBalance": "23.72469206",
            "totalUnrealizedProfit": "0.00000000",
            "totalPositionInitialMargin": "0.00000000",
            "totalOpenOrderInitialMargin": "0.00000000",
            "totalCrossWalletBalance": "23.72469206",
            "totalCrossUnPnl": "0.00000000",
            "availableBalance": "23.72469206",
            "maxWithdrawAmount": "23.72469206",
            "assets": [{
                "asset": "USDT",
                "walletBalance": "23.72469206",
                "unrealizedProfit": "0.00000000",
                "marginBalance": "23.72469206",
                "maintMargin": "0.00000000",
                "initialMargin": "0.00000000",
                "positionInitialMargin": "0.00000000",
                "openOrderInitialMargin": "0.00000000",
                "crossWalletBalance": "23.72469206",
                "crossUnPnl": "0.00000000",
                "availableBalance": "23.72469206",
                "maxWithdrawAmount": "23.72469206",
                "marginAvailable": true,
                "updateTime": 1625474304765
            }]
        }"#;
        let account: FuturesAccount = serde_json::from_str(raw).unwrap();
        assert_eq!(account.total_wallet_balance, "23.72469206");
        assert_eq!(account.assets.len(), 1);
        assert_eq!(account.assets[0].asset, "USDT");
        assert!(account.assets[0].margin_available);
    }

    #[test]
    fn exchange_info_keeps_only_symbols() {
        let raw = r#"{
            "timezone": "UTC",
            "serverTime": 1668315955000,
            "symbols": [{"symbol": "BTCUSDT", "status": "TRADING"}, {"symbol": "ETHUSDT"}]
        }"#;
        let info: ExchangeInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.symbols.len(), 2);
        assert_eq!(info.symbols[1].symbol, "ETHUSDT");
    }
}

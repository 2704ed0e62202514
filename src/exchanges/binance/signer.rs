use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Fixed receive window for all timestamped calls. The default window makes
/// futures account queries fail intermittently, hence the larger value.
pub const RECV_WINDOW_MS: u64 = 10_000;

/// Security classification of a Binance endpoint.
///
/// Only `UserData`, `Trade` and `Margin` carry the signing secret; the
/// remaining variants never produce a signature. An empty secret is not
/// rejected here: it still signs, and the venue refuses the call.
#[derive(Debug, Clone)]
pub enum SecurityMode {
    None,
    MarketData,
    UserStream,
    UserData { secret: String },
    Trade { secret: String },
    Margin { secret: String },
}

impl SecurityMode {
    fn secret(&self) -> Option<&str> {
        match self {
            Self::UserData { secret } | Self::Trade { secret } | Self::Margin { secret } => {
                Some(secret)
            }
            Self::None | Self::MarketData | Self::UserStream => None,
        }
    }
}

/// Build the final query string for one request.
///
/// Pure given a fixed `now_ms`; callers read the clock via [`get_timestamp`]
/// immediately before each build so timestamps are never reused.
///
/// The steps, in order:
/// 1. `SecurityMode::None` returns the raw query untouched, even when
///    `needs_timestamp` is set.
/// 2. Otherwise `timestamp=<now_ms>&recvWindow=10000` is appended when
///    requested.
/// 3. Modes without a secret return the payload unsigned (public endpoints
///    that still want a timestamp).
/// 4. Modes with a secret append `&signature=<hex HMAC-SHA256>` over the
///    payload built so far.
///
/// If the MAC cannot be initialized from the secret bytes, the *original*
/// raw query is returned rather than a half-built payload.
pub fn build_signed_query(
    raw_query: &str,
    needs_timestamp: bool,
    security: &SecurityMode,
    now_ms: u64,
) -> String {
    if matches!(security, SecurityMode::None) {
        return raw_query.to_string();
    }

    let mut built = raw_query.to_string();
    if needs_timestamp {
        if !built.is_empty() {
            built.push('&');
        }
        built.push_str(&format!("timestamp={}&recvWindow={}", now_ms, RECV_WINDOW_MS));
    }

    let Some(secret) = security.secret() else {
        return built;
    };

    sign_or_fall_back(raw_query, built, HmacSha256::new_from_slice(secret.as_bytes()))
}

/// Append the hex HMAC signature to the built payload, or return the
/// untouched `raw_query` when the MAC could not be constructed. HMAC-SHA256
/// accepts keys of any length, so the fallback arm is dead in production;
/// it is split out here so the arm stays reachable from tests.
fn sign_or_fall_back(
    raw_query: &str,
    mut built: String,
    mac: Result<HmacSha256, hmac::digest::InvalidLength>,
) -> String {
    let Ok(mut mac) = mac else {
        return raw_query.to_string();
    };
    mac.update(built.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    built.push_str("&signature=");
    built.push_str(&signature);
    built
}

/// Current epoch time in milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn get_timestamp() -> Result<u64, ExchangeError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .map_err(|e| ExchangeError::Other(format!("system time error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // hex(HMAC-SHA256(key = "test", msg = "timestamp=1000&recvWindow=10000"))
    const PINNED_SIGNATURE: &str =
        "a5f4d6c86d3b0586b9f8c75d17376e348b92ceb8378420483d95200126d41d64";

    fn user_data(secret: &str) -> SecurityMode {
        SecurityMode::UserData {
            secret: secret.to_string(),
        }
    }

    #[test]
    fn mode_none_ignores_the_timestamp_flag() {
        assert_eq!(
            build_signed_query("symbol=BTCUSDT", true, &SecurityMode::None, 1000),
            "symbol=BTCUSDT"
        );
        assert_eq!(build_signed_query("", true, &SecurityMode::None, 1000), "");
    }

    #[test]
    fn secretless_mode_without_timestamp_is_a_passthrough() {
        assert_eq!(
            build_signed_query("symbol=BTCUSDT", false, &SecurityMode::MarketData, 1000),
            "symbol=BTCUSDT"
        );
        assert_eq!(
            build_signed_query("", false, &SecurityMode::UserStream, 1000),
            ""
        );
    }

    #[test]
    fn secretless_mode_with_timestamp_stays_unsigned() {
        assert_eq!(
            build_signed_query("", true, &SecurityMode::MarketData, 1000),
            "timestamp=1000&recvWindow=10000"
        );
    }

    #[test]
    fn signed_query_matches_pinned_vector() {
        assert_eq!(
            build_signed_query("", true, &user_data("test"), 1000),
            format!("timestamp=1000&recvWindow=10000&signature={}", PINNED_SIGNATURE)
        );
    }

    #[test]
    fn existing_query_is_joined_with_an_ampersand() {
        let built = build_signed_query("symbol=BTCUSDT", true, &user_data("test"), 1000);
        assert!(built.starts_with("symbol=BTCUSDT&timestamp=1000&recvWindow=10000&signature="));
    }

    #[test]
    fn trade_and_margin_modes_sign_like_user_data() {
        let expected = build_signed_query("", true, &user_data("test"), 1000);
        let trade = SecurityMode::Trade {
            secret: "test".to_string(),
        };
        let margin = SecurityMode::Margin {
            secret: "test".to_string(),
        };
        assert_eq!(build_signed_query("", true, &trade, 1000), expected);
        assert_eq!(build_signed_query("", true, &margin, 1000), expected);
    }

    #[test]
    fn empty_secret_still_produces_a_signature() {
        let built = build_signed_query("", true, &user_data(""), 1000);
        let signature = built.rsplit_once("&signature=").map(|(_, s)| s).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn mac_failure_falls_back_to_the_original_raw_query() {
        let built = "symbol=BTCUSDT&timestamp=1000&recvWindow=10000".to_string();
        let out = sign_or_fall_back("symbol=BTCUSDT", built, Err(hmac::digest::InvalidLength));
        assert_eq!(out, "symbol=BTCUSDT");
    }

    #[test]
    fn determinism_given_a_fixed_clock() {
        let first = build_signed_query("symbol=ETHUSDT", true, &user_data("test"), 1_699_999);
        let second = build_signed_query("symbol=ETHUSDT", true, &user_data("test"), 1_699_999);
        assert_eq!(first, second);
    }
}

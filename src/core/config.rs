use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::env;

/// Caller-supplied API credentials for one venue.
///
/// Held only for the lifetime of the client instance that owns it; the core
/// never persists credentials. Secrets are wrapped so accidental `Debug` or
/// serialization output never leaks them.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub api_key: Secret<String>,
    pub secret_key: Secret<String>,
}

// Never expose secrets in serialized form.
impl Serialize for ExchangeConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ExchangeConfig", 2)?;
        state.serialize_field("api_key", "[REDACTED]")?;
        state.serialize_field("secret_key", "[REDACTED]")?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ExchangeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ExchangeConfigHelper {
            api_key: String,
            secret_key: String,
        }

        let helper = ExchangeConfigHelper::deserialize(deserializer)?;
        Ok(Self {
            api_key: Secret::new(helper.api_key),
            secret_key: Secret::new(helper.secret_key),
        })
    }
}

impl ExchangeConfig {
    /// Create a new configuration with API credentials.
    #[must_use]
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Expected environment variables:
    /// - `{PREFIX}_API_KEY` (e.g., `BINANCE_API_KEY`)
    /// - `{PREFIX}_SECRET_KEY` (e.g., `BINANCE_SECRET_KEY`)
    pub fn from_env(prefix: &str) -> Result<Self, ConfigError> {
        let api_key_var = format!("{}_API_KEY", prefix.to_uppercase());
        let secret_key_var = format!("{}_SECRET_KEY", prefix.to_uppercase());

        let api_key = env::var(&api_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(api_key_var))?;

        let secret_key = env::var(&secret_key_var)
            .map_err(|_| ConfigError::MissingEnvironmentVariable(secret_key_var))?;

        Ok(Self::new(api_key, secret_key))
    }

    /// Configuration for public endpoints only; authenticated calls made with
    /// it will still sign (with an empty secret) and be rejected by the venue.
    #[must_use]
    pub fn read_only() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Check whether this configuration carries non-empty credentials.
    #[must_use]
    pub fn has_credentials(&self) -> bool {
        !self.api_key.expose_secret().is_empty() && !self.secret_key.expose_secret().is_empty()
    }

    /// Get the API key (use carefully - exposes the secret).
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Get the secret key (use carefully - exposes the secret).
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvironmentVariable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_required_on_both_sides() {
        assert!(ExchangeConfig::new("k".to_string(), "s".to_string()).has_credentials());
        assert!(!ExchangeConfig::new("k".to_string(), String::new()).has_credentials());
        assert!(!ExchangeConfig::read_only().has_credentials());
    }

    #[test]
    fn serialization_redacts_secrets() {
        let config = ExchangeConfig::new("public".to_string(), "private".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("public"));
        assert!(!json.contains("private"));
        assert!(json.contains("[REDACTED]"));
    }
}

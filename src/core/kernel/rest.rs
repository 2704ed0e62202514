use crate::core::errors::ExchangeError;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{instrument, trace};

/// Transport trait for a single HTTP GET against a venue host.
///
/// Venue clients compose the final query string and auth headers themselves
/// (signing is venue logic, not transport logic); the transport only builds
/// the URL, executes the request and classifies what went wrong. Trait-based
/// so tests can inject stub transports instead of touching the network.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Execute a GET and decode the body as `T`.
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint path (leading slash)
    /// * `query` - Final query string, without the leading `?`; may be empty
    /// * `headers` - Extra request headers
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        headers: &[(&str, String)],
    ) -> Result<T, ExchangeError>;
}

/// Configuration for the reqwest-backed transport.
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API host.
    pub base_url: String,
    /// Venue name for logging and tracing.
    pub venue_name: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// User agent string to include in requests.
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, venue_name: String) -> Self {
        Self {
            base_url,
            venue_name,
            timeout_seconds: 30,
            user_agent: "tombit/0.1".to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Implementation of [`RestClient`] using reqwest.
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    pub fn new(config: RestClientConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ExchangeError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn build_url(&self, endpoint: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}{}", self.config.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.config.base_url, endpoint, query)
        }
    }

    #[instrument(skip(self, response), fields(venue = %self.config.venue_name, status = %response.status()))]
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ExchangeError> {
        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            ExchangeError::NetworkError(format!("failed to read response body: {}", e))
        })?;

        trace!("response body: {}", response_text);

        if status.is_success() {
            serde_json::from_str(&response_text).map_err(|e| {
                ExchangeError::DeserializationError(format!("failed to parse JSON response: {}", e))
            })
        } else {
            Err(ExchangeError::ApiError {
                code: i32::from(status.as_u16()),
                message: response_text,
            })
        }
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    #[instrument(skip(self, headers), fields(venue = %self.config.venue_name, endpoint = %endpoint))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        headers: &[(&str, String)],
    ) -> Result<T, ExchangeError> {
        let url = self.build_url(endpoint, query);
        let mut request = self.client.get(&url);

        for (key, value) in headers {
            request = request.header(*key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ExchangeError::NetworkError(format!("request failed: {}", e)))?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_omits_question_mark_for_empty_query() {
        let rest = ReqwestRest::new(RestClientConfig::new(
            "https://api.example.com".to_string(),
            "example".to_string(),
        ))
        .unwrap();

        assert_eq!(
            rest.build_url("/v1/markets", ""),
            "https://api.example.com/v1/markets"
        );
        assert_eq!(
            rest.build_url("/v1/ticker", "markets=KRW-BTC"),
            "https://api.example.com/v1/ticker?markets=KRW-BTC"
        );
    }
}

use crate::core::errors::ExchangeError;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims of the signed bearer token Upbit expects on private endpoints.
///
/// `query_hash` is sent empty even though the protocol ties it to the actual
/// query parameters; upstream behavior for authenticated calls that carry
/// query parameters is unverified, so the empty hash is kept as-is instead
/// of being completed here.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthClaims {
    pub access_key: String,
    pub nonce: String,
    pub query_hash: String,
    pub query_hash_alg: String,
}

impl AuthClaims {
    /// Fresh claims with a new random nonce.
    pub fn new(access_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            nonce: Uuid::new_v4().to_string(),
            query_hash: String::new(),
            query_hash_alg: "SHA512".to_string(),
        }
    }
}

/// Build the `Authorization` header value: `Bearer <JWT>`, HS256 over the
/// secret key. A new token (new nonce) is produced per request.
pub fn bearer_token(access_key: &str, secret_key: &str) -> Result<String, ExchangeError> {
    let claims = AuthClaims::new(access_key);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret_key.as_bytes()),
    )
    .map_err(|e| ExchangeError::AuthError(format!("failed to sign bearer token: {}", e)))?;

    Ok(format!("Bearer {}", token))
}

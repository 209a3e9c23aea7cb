//! Signed, stateless access tokens.
//!
//! Tokens are HS256 JWTs carrying the user's email as `sub`. The payload is
//! only base64-encoded, so nothing beyond the email is ever put in it.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenCodec {
    #[must_use]
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            lifetime,
        }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            &config.jwt_secret,
            Duration::minutes(config.token_expiry_minutes),
        )
    }

    pub fn issue(&self, identity: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: identity.to_string(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Checks signature, structure and expiry. Touches nothing but the token
    /// and the secret.
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret-key-for-testing", Duration::minutes(15))
    }

    #[test]
    fn test_issue_and_validate() {
        let codec = codec();

        let token = codec.issue("ada@example.com").unwrap();
        let claims = codec.validate(&token).unwrap();

        assert_eq!(claims.sub, "ada@example.com");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_malformed_token() {
        let err = codec().validate("invalid.token.here").unwrap_err();
        assert!(!matches!(err.kind(), ErrorKind::ExpiredSignature));
        assert!(codec().validate("").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let other = TokenCodec::new("some-other-secret", Duration::minutes(15));
        let token = other.issue("ada@example.com").unwrap();

        let err = codec().validate(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_expired_token() {
        let stale = TokenCodec::new("test-secret-key-for-testing", Duration::minutes(-5));
        let token = stale.issue("ada@example.com").unwrap();

        let err = codec().validate(&token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }
}

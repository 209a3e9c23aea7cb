//! Domain service for credentials and access tokens.
//!
//! Token validity is independent of whether the user row still exists:
//! a token stays valid until it expires, and there is no revocation list.

use thiserror::Error;

use crate::db::StoreError;

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, forged or expired token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Login result containing the identity and its access token.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub email: String,
    pub access_token: String,
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait CredentialService: Send + Sync {
    /// Checks an email/password pair and issues a token for it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no user matches both.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError>;

    /// Signs a token asserting `email`.
    fn issue_token(&self, email: &str) -> Result<String, AuthError>;

    /// Verifies a bearer token and returns the identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Unauthorized`] if the token is malformed, signed
    /// with another secret, or expired.
    fn validate_token(&self, token: &str) -> Result<String, AuthError>;
}

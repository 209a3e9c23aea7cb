//! JWT implementation of the `CredentialService` trait.

use async_trait::async_trait;
use tracing::debug;

use crate::db::{Store, StoreError};
use crate::services::credential_service::{AuthError, CredentialService, LoginResult};
use crate::services::token::TokenCodec;

pub struct JwtCredentialService {
    store: Store,
    codec: TokenCodec,
}

impl JwtCredentialService {
    #[must_use]
    pub const fn new(store: Store, codec: TokenCodec) -> Self {
        Self { store, codec }
    }
}

#[async_trait]
impl CredentialService for JwtCredentialService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AuthError> {
        let user = match self
            .store
            .find_user_by_email_and_password(email, password)
            .await
        {
            Ok(user) => user,
            Err(StoreError::NotFound) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        let access_token = self.issue_token(&user.email)?;

        Ok(LoginResult {
            email: user.email,
            access_token,
        })
    }

    fn issue_token(&self, email: &str) -> Result<String, AuthError> {
        self.codec
            .issue(email)
            .map_err(|e| AuthError::Token(format!("Failed to sign token: {e}")))
    }

    fn validate_token(&self, token: &str) -> Result<String, AuthError> {
        self.codec
            .validate(token)
            .map(|claims| claims.sub)
            .map_err(|e| {
                debug!("Rejected token: {e}");
                AuthError::Unauthorized(e.to_string())
            })
    }
}

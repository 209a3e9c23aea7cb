use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{
    ApiError, AppState, FormOrJson, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};
use crate::models::NewUser;

/// Identity asserted by a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(pub String);

// ============================================================================
// Middleware
// ============================================================================

/// Rejects the request with 401 unless it carries a valid
/// `Authorization: Bearer <token>` header. The wrapped handler, and with it
/// the store, is never reached on failure.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(&headers)
        .ok_or_else(|| ApiError::unauthorized("Missing Authorization Header"))?;

    let identity = state.credentials.validate_token(token)?;

    tracing::Span::current().record("user_id", identity.as_str());
    request.extensions_mut().insert(Identity(identity));

    Ok(next.run(request).await)
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    FormOrJson(payload): FormOrJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = state
        .store
        .create_user(NewUser {
            f_name: payload.f_name,
            l_name: payload.l_name,
            email: payload.email,
            password: payload.password,
        })
        .await
        .map_err(|e| ApiError::from_store(e, "User not found", "That email already exists."))?;

    tracing::info!(user_id = user.id, "Registered {}", user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully.")),
    ))
}

/// POST /login
/// Exchanges an email/password pair for an access token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    FormOrJson(payload): FormOrJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let result = state
        .credentials
        .login(&payload.email, &payload.password)
        .await?;

    tracing::Span::current().record("user_id", result.email.as_str());

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        access_token: result.access_token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(extract_bearer(&headers("Bearer   ")), None);
        assert_eq!(extract_bearer(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
    }
}

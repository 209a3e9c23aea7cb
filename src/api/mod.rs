use axum::{
    Json, Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::services::{CredentialService, JwtCredentialService, TokenCodec};

pub mod auth;
mod error;
mod extract;
mod observability;
mod planets;
mod types;
mod validation;

pub use error::ApiError;
pub use extract::FormOrJson;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub credentials: Arc<dyn CredentialService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: Config,
        store: Store,
        prometheus_handle: Option<PrometheusHandle>,
    ) -> Self {
        let codec = TokenCodec::from_config(&config.auth);
        let credentials = Arc::new(JwtCredentialService::new(store.clone(), codec));

        Self {
            config: Arc::new(config),
            store,
            credentials,
            prometheus_handle,
        }
    }
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState::new(config, store, prometheus_handle)))
}

/// GET /
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, Welcome to the Planetary API"))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let protected_routes = create_protected_router(state.clone());

    let mut app = Router::new()
        .route("/", get(index))
        .route("/planets", get(planets::list_planets))
        .route("/read_planet/{id}", get(planets::read_planet))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .merge(protected_routes);

    if state.prometheus_handle.is_some() {
        app = app.route("/metrics", get(observability::get_metrics));
    }

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    app.with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(observability::logging_middleware))
            .layer(cors_layer.allow_methods(Any).allow_headers(Any)),
    )
}

/// Every planet mutation sits behind the bearer-token check, including
/// `/update_planet`.
fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_planet", post(planets::add_planet))
        .route("/update_planet", put(planets::update_planet))
        .route("/delete_planet/{id}", delete(planets::delete_planet))
        .route_layer(middleware::from_fn_with_state(state, auth::require_token))
}

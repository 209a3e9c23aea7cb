use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::Identity;
use super::validation::{planet_fields, validate_planet_id};
use super::{ApiError, AppState, FormOrJson, MessageResponse, PlanetRequest, UpdatePlanetRequest};
use crate::models::Planet;

const NOT_FOUND: &str = "Planet details not found";
const EXISTS: &str = "Planet Exists";

pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Planet>>, ApiError> {
    let planets = state.store.list_planets().await?;
    Ok(Json(planets))
}

pub async fn read_planet(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Planet>, ApiError> {
    let id = validate_planet_id(path)?;

    let planet = state
        .store
        .get_planet(id)
        .await
        .map_err(|e| ApiError::from_store(e, NOT_FOUND, EXISTS))?;

    Ok(Json(planet))
}

pub async fn add_planet(
    State(state): State<Arc<AppState>>,
    Extension(Identity(user)): Extension<Identity>,
    FormOrJson(payload): FormOrJson<PlanetRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let fields = planet_fields(payload)?;

    let planet = state
        .store
        .create_planet(fields)
        .await
        .map_err(|e| ApiError::from_store(e, NOT_FOUND, EXISTS))?;

    tracing::info!(p_id = planet.p_id, %user, "Added planet {}", planet.fields.p_name);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("New planet added")),
    ))
}

pub async fn update_planet(
    State(state): State<Arc<AppState>>,
    Extension(Identity(user)): Extension<Identity>,
    FormOrJson(payload): FormOrJson<UpdatePlanetRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (id, request) = payload.into_parts();
    let fields = planet_fields(request)?;

    state
        .store
        .update_planet(id, fields)
        .await
        .map_err(|e| ApiError::from_store(e, NOT_FOUND, EXISTS))?;

    tracing::info!(p_id = id, %user, "Updated planet");

    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse::new("Updated successfully")),
    ))
}

pub async fn delete_planet(
    State(state): State<Arc<AppState>>,
    Extension(Identity(user)): Extension<Identity>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = validate_planet_id(path)?;

    state
        .store
        .delete_planet(id)
        .await
        .map_err(|e| ApiError::from_store(e, "Planet does not exist", EXISTS))?;

    tracing::info!(p_id = id, %user, "Deleted planet");

    Ok((StatusCode::ACCEPTED, Json(MessageResponse::new("Planet deleted"))))
}

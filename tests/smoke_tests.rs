//! Smoke tests over a seeded, file-backed database.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use planetary::config::Config;
use std::sync::Arc;
use tower::ServiceExt;

async fn spawn_seeded_app() -> (Arc<planetary::api::AppState>, Router, std::path::PathBuf) {
    let db_path =
        std::env::temp_dir().join(format!("planetary-smoke-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_url = format!("sqlite:{}", db_path.display());
    config.observability.metrics_enabled = false;

    let state = planetary::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    state.store.seed().await.expect("failed to seed");

    let router = planetary::api::router(state.clone());
    (state, router, db_path)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn smoke_seeded_login_and_planet_lifecycle() {
    let (_state, app, db_path) = spawn_seeded_app().await;

    // Seeded planets are readable without a token.
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/planets").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let planets = body_json(response).await;
    let names: Vec<&str> = planets
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["p_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mercury", "Mars", "Jupiter"]);

    // The seeded user can log in.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::json!({
                        "email": "ramesh.chenni@gmail.com",
                        "password": "ramesh"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    // Seeded names are taken.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/add_planet")
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(Body::from(
                    "p_name=Jupiter&p_type=Class+G&home_star=Sol&mass=1&radius=1&distance=1",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/delete_planet/{}", planets[0]["p_id"]))
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/planets").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    // Without a recorder there is no metrics route.
    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let _ = std::fs::remove_file(db_path);
}

//! Parallel writers racing on the same unique key.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use planetary::config::Config;
use std::sync::Arc;
use tower::ServiceExt;

const PARALLEL: usize = 16;

async fn spawn_file_backed_app() -> (Arc<planetary::api::AppState>, Router, std::path::PathBuf) {
    let db_path =
        std::env::temp_dir().join(format!("planetary-race-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_url = format!("sqlite:{}", db_path.display());
    config.general.max_db_connections = 8;

    let state = planetary::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    let router = planetary::api::router(state.clone());
    (state, router, db_path)
}

fn post(uri: &str, body: String, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

fn tally(statuses: &[StatusCode]) -> (usize, usize) {
    let created = statuses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    (created, conflicts)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_creates_of_same_planet() {
    let (state, app, db_path) = spawn_file_backed_app().await;
    let token = state.credentials.issue_token("racer@example.com").unwrap();

    let requests = (0..PARALLEL).map(|i| {
        let app = app.clone();
        let body = format!(
            "p_name=Mars&p_type=Class+T&home_star=Sol&mass={i}&radius=3389&distance=2.27e9"
        );
        let request = post("/add_planet", body, Some(&token));
        tokio::spawn(async move { app.oneshot(request).await.unwrap().status() })
    });

    let statuses: Vec<StatusCode> = futures::future::join_all(requests)
        .await
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(tally(&statuses), (1, PARALLEL - 1), "{statuses:?}");
    assert_eq!(state.store.count_planets_named("Mars").await.unwrap(), 1);

    drop(state);
    let _ = std::fs::remove_file(db_path);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_registrations_of_same_email() {
    let (state, app, db_path) = spawn_file_backed_app().await;

    let requests = (0..PARALLEL).map(|i| {
        let app = app.clone();
        let body = format!("f_name=User{i}&l_name=Racer&email=race%40example.com&password=pw{i}");
        tokio::spawn(async move {
            app.oneshot(post("/register", body, None))
                .await
                .unwrap()
                .status()
        })
    });

    let statuses: Vec<StatusCode> = futures::future::join_all(requests)
        .await
        .into_iter()
        .map(Result::unwrap)
        .collect();

    assert_eq!(tally(&statuses), (1, PARALLEL - 1), "{statuses:?}");
    assert_eq!(
        state
            .store
            .count_users_with_email("race@example.com")
            .await
            .unwrap(),
        1
    );

    drop(state);
    let _ = std::fs::remove_file(db_path);
}

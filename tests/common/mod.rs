#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const FOOLS_MATE: [&str; 4] = ["f2f3", "e7e5", "g2g4", "d8h4"];

pub const SCHOLARS_MATE: [&str; 7] = ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"];

/// Router backed by a fresh game and an in-memory history database.
pub async fn app() -> (Router, SqlitePool) {
    let pool = server::db::pool::create_memory_pool()
        .await
        .expect("in-memory sqlite");
    server::db::pool::run_migrations(&pool)
        .await
        .expect("migrations");
    let router = server::build_router(server::new_shared_game(), Some(pool.clone()));
    (router, pool)
}

/// Router with history disabled.
pub fn app_without_history() -> Router {
    server::build_router(server::new_shared_game(), None)
}

/// Send one request and decode the JSON body.
pub async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::GET, path, None).await
}

pub async fn post(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, path, Some(body)).await
}

pub async fn post_empty(app: &Router, path: &str) -> (StatusCode, Value) {
    send(app, Method::POST, path, None).await
}

pub async fn play(app: &Router, uci: &str) -> (StatusCode, Value) {
    post(app, "/move", serde_json::json!({ "move": uci })).await
}

/// Play a sequence that must be legal; returns the last response.
pub async fn play_all(app: &Router, moves: &[&str]) -> Value {
    let mut last = Value::Null;
    for mv in moves {
        let (status, body) = play(app, mv).await;
        assert_eq!(status, StatusCode::OK, "{mv} rejected: {body}");
        last = body;
    }
    last
}

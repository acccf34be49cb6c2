//! In-process mock character API for integration tests.
//!
//! Serves a small fixed roster plus a few special ids that trigger the error
//! shapes the client must normalize. Tests spawn it on an ephemeral port and
//! point a real `ApiClient` at it.

use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Roster served by `GET /characters`. Ids are numeric, as the real API
/// serves them.
pub fn roster() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Goku",
            "race": "Saiyan",
            "ki": "60.000.000",
            "maxKi": "90 Septillion",
            "image": "goku.webp"
        }),
        json!({
            "id": 2,
            "name": "Vegeta",
            "race": "Saiyan",
            "ki": "54.000.000",
            "image": "vegeta.webp"
        }),
        json!({
            "id": 3,
            "name": "Piccolo",
            "race": "Namekian",
            "ki": "2.000.000",
            "image": "piccolo.webp"
        }),
    ]
}

#[derive(Deserialize)]
struct Page {
    #[serde(default = "default_page")]
    page: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

async fn list_characters(Query(page): Query<Page>) -> Json<Vec<Value>> {
    let start = page.page.saturating_sub(1) * page.limit;
    let items: Vec<Value> = roster().into_iter().skip(start).take(page.limit).collect();
    Json(items)
}

async fn get_character(Path(id): Path<String>) -> Response {
    // Special ids exercising the client's error normalization
    match id.as_str() {
        // `error` field must win over `message`
        "boom" => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "kaboom", "message": "should lose" })),
            )
                .into_response();
        }
        // Non-JSON error body falls back to the status line
        "teapot" => {
            return (
                StatusCode::IM_A_TEAPOT,
                [(header::CONTENT_TYPE, "text/plain")],
                "short and stout",
            )
                .into_response();
        }
        // 204 where a record was expected
        "empty" => return StatusCode::NO_CONTENT.into_response(),
        _ => {}
    }

    match roster()
        .into_iter()
        .find(|c| c["id"].to_string() == id)
    {
        Some(character) => Json(character).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Character with id {id} not found") })),
        )
            .into_response(),
    }
}

async fn delete_character(Path(_id): Path<String>) -> StatusCode {
    StatusCode::NO_CONTENT
}

/// The well-behaved mock API
pub fn app() -> Router {
    Router::new()
        .route("/characters", get(list_characters))
        .route(
            "/characters/:id",
            get(get_character).delete(delete_character),
        )
}

/// A misbehaving API whose list endpoint returns an object instead of an
/// array
pub fn misbehaving_app() -> Router {
    Router::new().route(
        "/characters",
        get(|| async { Json(json!({ "message": "this is not an array" })) }),
    )
}

/// Serve a router on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock API listener");
    let addr = listener.local_addr().expect("mock API local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock API");
    });

    format!("http://{addr}")
}

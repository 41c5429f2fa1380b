use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::global::Global;
use crate::utils::lang::Language;

pub mod countries;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/", get(root))
        .route("/languages", get(languages))
        .merge(countries::routes())
}

#[derive(serde::Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: Vec<&'static str>,
}

#[tracing::instrument(skip(global))]
async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Country Names API",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints: vec![
            "/languages",
            "/countries",
            "/countries/:code",
            "/countries/:code/name",
        ],
    })
}

/// GET /languages
///
/// Lists the canonical tags every lookup accepts.
#[tracing::instrument]
async fn languages() -> Json<[Language; 16]> {
    Json(Language::ALL)
}

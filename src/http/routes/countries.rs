use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::database::country::{Country, CountryName};
use crate::global::Global;
use crate::http::error::ApiError;

pub fn routes() -> Router<Arc<Global>> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/:code", get(get_country))
        .route("/countries/:code/name", get(get_country_name))
}

#[derive(Debug, serde::Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// GET /countries?lang=xx
///
/// Returns every real country as `{code, name}`, ordered by name.
#[tracing::instrument(skip(global))]
async fn list_countries(
    State(global): State<Arc<Global>>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Vec<CountryName>>, ApiError> {
    let names = Country::list_all(&global.db, query.lang.as_deref()).await?;
    Ok(Json(names))
}

/// GET /countries/:code?lang=xx
#[tracing::instrument(skip(global))]
async fn get_country(
    State(global): State<Arc<Global>>,
    Path(code): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<Country>, ApiError> {
    let country = Country::find(&global.db, &code, query.lang.as_deref()).await?;
    Ok(Json(country))
}

/// GET /countries/:code/name?lang=xx
#[tracing::instrument(skip(global))]
async fn get_country_name(
    State(global): State<Arc<Global>>,
    Path(code): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<CountryName>, ApiError> {
    let name = Country::lookup_name(&global.db, &code, query.lang.as_deref()).await?;
    Ok(Json(CountryName {
        code: code.to_lowercase(),
        name,
    }))
}

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use axum::extract::Request;
use axum::response::Response;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer, MaxAge};
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::global::Global;

pub mod error;
pub mod routes;

/// Every route only reads, so only GET is allowed cross-origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([hyper::Method::GET]))
        .allow_headers(AllowHeaders::any())
        .max_age(MaxAge::exact(Duration::from_secs(86400)))
}

fn request_span(req: &Request) -> Span {
    tracing::debug_span!(
        "lookup",
        method = %req.method(),
        path = %req.uri().path(),
        query = req.uri().query().unwrap_or_default(),
        status = tracing::field::Empty,
    )
}

pub(crate) fn app(global: Arc<Global>) -> Router {
    Router::new()
        .merge(routes::routes())
        .with_state(global)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(request_span)
                        .on_request(|_req: &Request, _span: &Span| {
                            tracing::debug!("lookup started");
                        })
                        .on_response(|res: &Response, latency: Duration, span: &Span| {
                            span.record("status", res.status().as_u16());
                            tracing::debug!(
                                status = res.status().as_u16(),
                                latency = ?latency,
                                "lookup finished"
                            );
                        }),
                )
                .layer(cors_layer()),
        )
}

#[tracing::instrument]
async fn not_found() -> error::ApiError {
    error::ApiError::not_found(error::ApiErrorCode::ROUTE_NOT_FOUND, "route not found")
}

/// Serve the lookups until the listener fails.
#[tracing::instrument(name = "HTTP", skip_all)]
pub async fn run(global: Arc<Global>) -> anyhow::Result<()> {
    let bind = global.config.api.bind;

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;

    tracing::info!(%bind, "serving country lookups");

    axum::serve(
        listener,
        app(global).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("http server error")?;

    Ok(())
}

//! HTTP and WebSocket transport for the control plane API

use anyhow::{Context, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQL, GraphQLSubscription};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use serde::Serialize;
use std::future::Future;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use super::ApiSchema;
use crate::core::get_bot_version;

/// Queries and mutations (POST), GraphiQL (GET)
pub const GRAPHQL_PATH: &str = "/";

/// graphql-ws subscriptions
pub const SUBSCRIPTION_PATH: &str = "/ws";

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

pub fn health_response(start_time: Instant) -> HealthResponse {
    HealthResponse {
        status: "ok",
        version: get_bot_version(),
        uptime_seconds: start_time.elapsed().as_secs(),
    }
}

async fn graphiql() -> impl IntoResponse {
    Html(
        GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .subscription_endpoint(SUBSCRIPTION_PATH)
            .finish(),
    )
}

/// Build the API router
///
/// CORS is permissive: the dashboard is served from its own origin.
pub fn router(schema: ApiSchema, start_time: Instant) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema.clone())),
        )
        .route_service(SUBSCRIPTION_PATH, GraphQLSubscription::new(schema))
        .route(
            HEALTH_PATH,
            get(move || async move { Json(health_response(start_time)) }),
        )
        .layer(CorsLayer::permissive())
}

/// Bind the API listener
pub async fn bind(addr: &str) -> Result<TcpListener> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind API listener on {addr}"))?;
    info!("🌐 Listening on: http://{}", listener.local_addr()?);
    Ok(listener)
}

/// Serve the API on a bound listener until `shutdown` resolves
pub async fn serve<F>(
    schema: ApiSchema,
    listener: TcpListener,
    start_time: Instant,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(schema, start_time))
        .with_graceful_shutdown(shutdown)
        .await
        .context("API server error")?;

    info!("API server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_health_response() {
        let health = health_response(Instant::now());

        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert!(health.uptime_seconds < 5);

        let json = serde_json::to_value(&health).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        use crate::core::LogBuffer;
        use crate::testing::{test_schema, MockBot, RecordingSupervisor};
        use std::sync::Arc;

        let schema = test_schema(
            Arc::new(MockBot::new()),
            Arc::new(RecordingSupervisor::new()),
            LogBuffer::new(10),
            None,
        );
        let listener = bind("127.0.0.1:0").await.unwrap();

        // Shutdown future is already complete, so serve returns straight away
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve(schema, listener, Instant::now(), async {}),
        )
        .await
        .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_bind_fails_when_port_taken() {
        let holder = bind("127.0.0.1:0").await.unwrap();
        let addr = holder.local_addr().unwrap().to_string();

        let err = bind(&addr).await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind API listener"));
        assert!(err.to_string().contains(&addr));
    }
}

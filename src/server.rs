//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, collaborator client setup, service wiring,
//! and Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{SubscriptionService, UnsubscribeService};
use crate::config::Config;
use crate::infrastructure::http::{
    HttpNotificationGateway, HttpProfileResolver, HttpUnsubscribeGateway,
};
use crate::infrastructure::persistence::{PgAccountLinkRepository, PgAuditRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Shared reqwest client for the collaborator gateways
/// - Subscription and unsubscribe services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()
        .context("Failed to build HTTP client")?;

    let pool = Arc::new(pool);
    let links = Arc::new(PgAccountLinkRepository::new(pool.clone()));
    let audits = Arc::new(PgAuditRepository::new(pool.clone()));

    let notifier = Arc::new(HttpNotificationGateway::new(
        client.clone(),
        config.notification_url.clone(),
    ));
    let profiles = Arc::new(HttpProfileResolver::new(
        client.clone(),
        config.profile_url.clone(),
    ));
    let unsubscriber = Arc::new(HttpUnsubscribeGateway::new(
        client,
        config.unsubscribe_url.clone(),
    ));

    let subscriptions = Arc::new(SubscriptionService::new(
        links.clone(),
        profiles,
        notifier,
        config.operator_settings()?,
    ));
    let unsubscribes = Arc::new(UnsubscribeService::new(links, audits, unsubscriber));

    let state = AppState::new(subscriptions, unsubscribes, pool);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

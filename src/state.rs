//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{SubscriptionService, UnsubscribeService};
use crate::infrastructure::http::{
    HttpNotificationGateway, HttpProfileResolver, HttpUnsubscribeGateway,
};
use crate::infrastructure::persistence::{PgAccountLinkRepository, PgAuditRepository};

/// Subscription service wired with the production collaborators.
pub type Subscriptions =
    SubscriptionService<PgAccountLinkRepository, HttpProfileResolver, HttpNotificationGateway>;

/// Unsubscribe service wired with the production collaborators.
pub type Unsubscribes =
    UnsubscribeService<PgAccountLinkRepository, PgAuditRepository, HttpUnsubscribeGateway>;

#[derive(Clone)]
pub struct AppState {
    pub subscriptions: Arc<Subscriptions>,
    pub unsubscribes: Arc<Unsubscribes>,
    /// Kept for the health check; all data access goes through the services.
    pub db: Arc<PgPool>,
}

impl AppState {
    pub fn new(
        subscriptions: Arc<Subscriptions>,
        unsubscribes: Arc<Unsubscribes>,
        db: Arc<PgPool>,
    ) -> Self {
        Self {
            subscriptions,
            unsubscribes,
            db,
        }
    }
}

//! Identity-bound subscription transitions: update, provision, unlink.

use std::sync::Arc;

use serde::Serialize;

use crate::config::OperatorSettings;
use crate::domain::classifier::classify;
use crate::domain::gateways::{NotificationGateway, ProfileResolver};
use crate::domain::notification::{
    BillingPeriod, DeliveryOutcome, NotificationIntent, NotificationKind,
};
use crate::domain::repositories::AccountLinkRepository;
use crate::domain::requests::{
    ProvisionSubscriptionRequest, UnlinkAccountRequest, UpdateSubscriptionRequest,
};
use crate::error::{AppError, DomainError};

/// Orchestrates the three identity-bound transition flows.
///
/// Each flow resolves an [`crate::domain::entities::AccountLink`], derives a
/// notification intent, and dispatches it synchronously. Update and unlink
/// capture every failure into a [`DeliveryOutcome`]; provision raises when
/// the (msisdn, shared id) combination is unknown and lets the transport
/// boundary render the error.
pub struct SubscriptionService<L, P, N>
where
    L: AccountLinkRepository,
    P: ProfileResolver,
    N: NotificationGateway,
{
    links: Arc<L>,
    profiles: Arc<P>,
    notifier: Arc<N>,
    operator: OperatorSettings,
}

impl<L, P, N> SubscriptionService<L, P, N>
where
    L: AccountLinkRepository,
    P: ProfileResolver,
    N: NotificationGateway,
{
    /// Creates a new subscription service.
    pub fn new(links: Arc<L>, profiles: Arc<P>, notifier: Arc<N>, operator: OperatorSettings) -> Self {
        Self {
            links,
            profiles,
            notifier,
            operator,
        }
    }

    /// Handles a carrier-reported subscription update.
    ///
    /// Classifies the event (renewal → activation, matching reason →
    /// self-deactivation, anything else → disconnection) and dispatches one
    /// notification. Infallible: lookup misses and dispatch failures are
    /// captured in the returned outcome.
    pub async fn update_subscription(
        &self,
        http_method: &str,
        context_path: &str,
        request: &UpdateSubscriptionRequest,
    ) -> DeliveryOutcome {
        self.run_update(http_method, context_path, request)
            .await
            .into()
    }

    async fn run_update(
        &self,
        http_method: &str,
        context_path: &str,
        request: &UpdateSubscriptionRequest,
    ) -> Result<(), AppError> {
        let renewed = request.subscription_renewed.unwrap_or(false);

        tracing::debug!(
            unique_shared_id = %request.unique_shared_id,
            renewed,
            "resolving account link for update"
        );
        let link = self
            .links
            .find_by_shared_id(&request.unique_shared_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let kind = classify(
            renewed,
            request.reason.as_deref(),
            &self.operator.reason_patterns,
        );
        tracing::debug!(?kind, "classified subscription update");

        // Only provision intents carry a language; the update request's
        // language field travels along in the serialized original only.
        let intent = self.build_intent(
            &request.unique_shared_id,
            &link.msisdn,
            kind,
            &link.user_id,
            None,
        )?;

        self.dispatch(http_method, context_path, &intent, &link.user_id, request)
            .await
    }

    /// Activates a new (msisdn, shared id) combination.
    ///
    /// # Errors
    ///
    /// Raises [`DomainError::UniqueCombinationNotFound`] when no link matches
    /// the pair; this error is not converted into an envelope. Failures after
    /// the eligibility check are captured in the returned outcome.
    pub async fn provision_subscription(
        &self,
        http_method: &str,
        context_path: &str,
        request: &ProvisionSubscriptionRequest,
    ) -> Result<DeliveryOutcome, AppError> {
        let link = self
            .links
            .find_by_msisdn_and_shared_id(&request.msisdn, &request.unique_shared_id)
            .await?
            .ok_or_else(|| DomainError::UniqueCombinationNotFound {
                unique_shared_id: request.unique_shared_id.clone(),
                msisdn: request.msisdn.clone(),
            })?;

        tracing::debug!(
            unique_shared_id = ?link.unique_shared_id,
            msisdn = %request.msisdn,
            "found account link for provisioning"
        );

        // A missing profile is not a failure: activation proceeds with an
        // empty user id.
        let profile = self.profiles.check_eligibility(&request.msisdn).await?;
        let user_id = profile.map(|p| p.user_id).unwrap_or_default();

        Ok(self
            .activate(http_method, context_path, &user_id, request)
            .await
            .into())
    }

    async fn activate(
        &self,
        http_method: &str,
        context_path: &str,
        user_id: &str,
        request: &ProvisionSubscriptionRequest,
    ) -> Result<(), AppError> {
        if let Some(status) = self.profiles.account_status(user_id).await? {
            tracing::debug!(account_status = %status.account_status, "resolved account status");
        }

        let intent = self.build_intent(
            &request.unique_shared_id,
            &request.msisdn,
            NotificationKind::Activation,
            user_id,
            request.language.clone(),
        )?;

        self.dispatch(http_method, context_path, &intent, user_id, request)
            .await
    }

    /// Handles a user-initiated account unlink.
    ///
    /// Always dispatches a self-deactivation notification. Infallible like
    /// [`Self::update_subscription`].
    pub async fn unlink_account(
        &self,
        http_method: &str,
        context_path: &str,
        request: &UnlinkAccountRequest,
    ) -> DeliveryOutcome {
        self.run_unlink(http_method, context_path, request)
            .await
            .into()
    }

    async fn run_unlink(
        &self,
        http_method: &str,
        context_path: &str,
        request: &UnlinkAccountRequest,
    ) -> Result<(), AppError> {
        let link = self
            .links
            .find_by_shared_id(&request.unique_shared_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let intent = self.build_intent(
            &request.unique_shared_id,
            &link.msisdn,
            NotificationKind::SelfDeactivation,
            &link.user_id,
            None,
        )?;

        self.dispatch(http_method, context_path, &intent, &link.user_id, request)
            .await
    }

    /// Builds the notification intent for a classified transition.
    ///
    /// The billing period code is resolved here so a misconfigured cadence
    /// fails before any dispatch.
    fn build_intent(
        &self,
        unique_shared_id: &str,
        msisdn: &str,
        kind: NotificationKind,
        user_id: &str,
        language: Option<String>,
    ) -> Result<NotificationIntent, AppError> {
        let billing_period_type = BillingPeriod::from_code(&self.operator.billing_period_code)?;

        Ok(NotificationIntent {
            msisdn: msisdn.to_string(),
            unique_shared_id: unique_shared_id.to_string(),
            user_id: user_id.to_string(),
            notification_type: kind,
            billing_period_type,
            language,
        })
    }

    async fn dispatch<R: Serialize>(
        &self,
        http_method: &str,
        context_path: &str,
        intent: &NotificationIntent,
        user_id: &str,
        original_request: &R,
    ) -> Result<(), AppError> {
        let serialized = serde_json::to_string(original_request)
            .map_err(|e| AppError::Unexpected(e.to_string()))?;

        self.notifier
            .deliver(
                http_method,
                context_path,
                intent,
                &self.operator.carrier,
                &self.operator.country,
                user_id,
                &serialized,
            )
            .await
    }
}

//! Unsubscribe flow with guaranteed audit finalization.

use std::sync::Arc;

use crate::domain::entities::ProcessedStatus;
use crate::domain::gateways::UnsubscribeGateway;
use crate::domain::repositories::{AccountLinkRepository, AuditRepository};
use crate::domain::requests::UnsubscribeRequest;
use crate::error::{AppError, DomainError};

/// Orchestrates carrier-side unsubscription.
///
/// An audit row is created before anything else, and finalized exactly once
/// whatever happens in between. The attempt itself (lookup plus delivery) is
/// captured as a value rather than short-circuited, so the finalize call
/// sits on every control path; a captured error is re-raised only after
/// finalization.
pub struct UnsubscribeService<L, A, U>
where
    L: AccountLinkRepository,
    A: AuditRepository,
    U: UnsubscribeGateway,
{
    links: Arc<L>,
    audits: Arc<A>,
    gateway: Arc<U>,
}

impl<L, A, U> UnsubscribeService<L, A, U>
where
    L: AccountLinkRepository,
    A: AuditRepository,
    U: UnsubscribeGateway,
{
    /// Creates a new unsubscribe service.
    pub fn new(links: Arc<L>, audits: Arc<A>, gateway: Arc<U>) -> Self {
        Self {
            links,
            audits,
            gateway,
        }
    }

    /// Runs one unsubscribe attempt.
    ///
    /// # Errors
    ///
    /// Raises [`DomainError::InvalidSubscriber`] when the msisdn resolves to
    /// no link or to a link without a shared id, and [`AppError::Delivery`]
    /// when the collaborator is unreachable - in both cases only after the
    /// audit row has been finalized as `Error`. A collaborator ack carrying
    /// an error field finalizes as `Error` without raising.
    pub async fn unsubscribe(&self, request: &UnsubscribeRequest) -> Result<(), AppError> {
        let audit = self.audits.create_pending(request).await?;

        let attempt = self.attempt_delivery(request).await;
        let status = match &attempt {
            Ok(status) => *status,
            Err(_) => ProcessedStatus::Error,
        };

        tracing::info!(audit_id = audit.id, %status, "finalizing unsubscribe audit");
        self.audits.finalize(audit.id, status).await?;

        attempt.map(|_| ())
    }

    async fn attempt_delivery(
        &self,
        request: &UnsubscribeRequest,
    ) -> Result<ProcessedStatus, AppError> {
        let link = self.links.find_by_msisdn(&request.msisdn).await?;

        let Some(shared_id) = link.as_ref().and_then(|l| l.effective_shared_id()) else {
            return Err(DomainError::InvalidSubscriber {
                msisdn: request.msisdn.clone(),
            }
            .into());
        };

        let ack = self.gateway.unsubscribe(request, shared_id).await?;
        if let Some(error) = &ack.error {
            tracing::warn!(%error, msisdn = %request.msisdn, "unsubscribe collaborator reported an error");
            Ok(ProcessedStatus::Error)
        } else {
            Ok(ProcessedStatus::Success)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccountLink, UnsubscribeAudit};
    use crate::domain::gateways::{MockUnsubscribeGateway, UnsubscribeAck};
    use crate::domain::repositories::{MockAccountLinkRepository, MockAuditRepository};
    use chrono::Utc;

    fn request() -> UnsubscribeRequest {
        UnsubscribeRequest {
            msisdn: "491700000001".to_string(),
            user_id: Some("user-1".to_string()),
            request_trx_id: Some("trx-1".to_string()),
        }
    }

    fn pending_audit(id: i64) -> UnsubscribeAudit {
        UnsubscribeAudit {
            id,
            msisdn: "491700000001".to_string(),
            user_id: Some("user-1".to_string()),
            request_trx_id: Some("trx-1".to_string()),
            status: ProcessedStatus::Pending,
            created_at: Utc::now(),
            processed_at: None,
        }
    }

    fn linked(shared_id: Option<&str>) -> AccountLink {
        AccountLink::new(
            1,
            "491700000001".to_string(),
            shared_id.map(str::to_string),
            "user-1".to_string(),
        )
    }

    fn service(
        links: MockAccountLinkRepository,
        audits: MockAuditRepository,
        gateway: MockUnsubscribeGateway,
    ) -> UnsubscribeService<MockAccountLinkRepository, MockAuditRepository, MockUnsubscribeGateway>
    {
        UnsubscribeService::new(Arc::new(links), Arc::new(audits), Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_successful_delivery_finalizes_success() {
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(1)
            .returning(|_| Ok(Some(linked(Some("S1")))));

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Ok(pending_audit(10)));
        audits
            .expect_finalize()
            .withf(|audit_id, status| *audit_id == 10 && *status == ProcessedStatus::Success)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway
            .expect_unsubscribe()
            .withf(|_, shared_id| shared_id == "S1")
            .times(1)
            .returning(|_, _| Ok(UnsubscribeAck { error: None }));

        let result = service(links, audits, gateway).unsubscribe(&request()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_collaborator_error_field_finalizes_error_without_raising() {
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(1)
            .returning(|_| Ok(Some(linked(Some("S1")))));

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Ok(pending_audit(11)));
        audits
            .expect_finalize()
            .withf(|_, status| *status == ProcessedStatus::Error)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway.expect_unsubscribe().times(1).returning(|_, _| {
            Ok(UnsubscribeAck {
                error: Some("ALREADY_UNSUBSCRIBED".to_string()),
            })
        });

        let result = service(links, audits, gateway).unsubscribe(&request()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_link_finalizes_error_and_raises_invalid_subscriber() {
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(1)
            .returning(|_| Ok(None));

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Ok(pending_audit(12)));
        audits
            .expect_finalize()
            .withf(|_, status| *status == ProcessedStatus::Error)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway.expect_unsubscribe().times(0);

        let err = service(links, audits, gateway)
            .unsubscribe(&request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidSubscriber { .. })
        ));
    }

    #[tokio::test]
    async fn test_blank_shared_id_finalizes_error_and_raises_invalid_subscriber() {
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(1)
            .returning(|_| Ok(Some(linked(Some("  ")))));

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Ok(pending_audit(13)));
        audits
            .expect_finalize()
            .withf(|_, status| *status == ProcessedStatus::Error)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway.expect_unsubscribe().times(0);

        let err = service(links, audits, gateway)
            .unsubscribe(&request())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::InvalidSubscriber { .. })
        ));
    }

    #[tokio::test]
    async fn test_delivery_raise_finalizes_error_then_propagates() {
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(1)
            .returning(|_| Ok(Some(linked(Some("S1")))));

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Ok(pending_audit(14)));
        audits
            .expect_finalize()
            .withf(|_, status| *status == ProcessedStatus::Error)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway
            .expect_unsubscribe()
            .times(1)
            .returning(|_, _| Err(AppError::Delivery("connection reset".to_string())));

        let err = service(links, audits, gateway)
            .unsubscribe(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Delivery(_)));
    }

    #[tokio::test]
    async fn test_lookup_raise_finalizes_error_then_propagates() {
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(1)
            .returning(|_| Err(AppError::Unexpected("storage offline".to_string())));

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Ok(pending_audit(15)));
        audits
            .expect_finalize()
            .withf(|_, status| *status == ProcessedStatus::Error)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway.expect_unsubscribe().times(0);

        let err = service(links, audits, gateway)
            .unsubscribe(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_repeated_attempts_create_distinct_audit_records() {
        // Current behavior: no dedup key, two calls mean two audit rows.
        let mut links = MockAccountLinkRepository::new();
        links
            .expect_find_by_msisdn()
            .times(2)
            .returning(|_| Ok(Some(linked(Some("S1")))));

        let mut audits = MockAuditRepository::new();
        let mut next_id = 20;
        audits.expect_create_pending().times(2).returning(move |_| {
            next_id += 1;
            Ok(pending_audit(next_id))
        });
        audits
            .expect_finalize()
            .withf(|_, status| *status == ProcessedStatus::Success)
            .times(2)
            .returning(|_, _| Ok(()));

        let mut gateway = MockUnsubscribeGateway::new();
        gateway
            .expect_unsubscribe()
            .times(2)
            .returning(|_, _| Ok(UnsubscribeAck { error: None }));

        let service = service(links, audits, gateway);
        assert!(service.unsubscribe(&request()).await.is_ok());
        assert!(service.unsubscribe(&request()).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_pending_failure_skips_delivery_and_finalization() {
        let mut links = MockAccountLinkRepository::new();
        links.expect_find_by_msisdn().times(0);

        let mut audits = MockAuditRepository::new();
        audits
            .expect_create_pending()
            .times(1)
            .returning(|_| Err(AppError::Unexpected("insert failed".to_string())));
        audits.expect_finalize().times(0);

        let mut gateway = MockUnsubscribeGateway::new();
        gateway.expect_unsubscribe().times(0);

        let err = service(links, audits, gateway)
            .unsubscribe(&request())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Unexpected(_)));
    }
}

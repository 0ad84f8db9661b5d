//! PostgreSQL implementation of the unsubscribe audit repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::{ProcessedStatus, UnsubscribeAudit};
use crate::domain::repositories::AuditRepository;
use crate::domain::requests::UnsubscribeRequest;
use crate::error::AppError;

/// Audit trail persistence against the `unsubscribe_audits` table.
///
/// Inserts never deduplicate: every attempt gets its own row.
pub struct PgAuditRepository {
    pool: Arc<PgPool>,
}

impl PgAuditRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AuditRow {
    id: i64,
    msisdn: String,
    user_id: Option<String>,
    request_trx_id: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
}

impl From<AuditRow> for UnsubscribeAudit {
    fn from(row: AuditRow) -> Self {
        UnsubscribeAudit {
            id: row.id,
            msisdn: row.msisdn,
            user_id: row.user_id,
            request_trx_id: row.request_trx_id,
            status: ProcessedStatus::from_db(&row.status),
            created_at: row.created_at,
            processed_at: row.processed_at,
        }
    }
}

#[async_trait]
impl AuditRepository for PgAuditRepository {
    async fn create_pending(
        &self,
        request: &UnsubscribeRequest,
    ) -> Result<UnsubscribeAudit, AppError> {
        let row = sqlx::query_as::<_, AuditRow>(
            r#"
            INSERT INTO unsubscribe_audits (msisdn, user_id, request_trx_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, msisdn, user_id, request_trx_id, status, created_at, processed_at
            "#,
        )
        .bind(&request.msisdn)
        .bind(&request.user_id)
        .bind(&request.request_trx_id)
        .bind(ProcessedStatus::Pending.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn finalize(&self, audit_id: i64, status: ProcessedStatus) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE unsubscribe_audits
            SET status = $1, processed_at = now()
            WHERE id = $2
            "#,
        )
        .bind(status.as_str())
        .bind(audit_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}

//! PostgreSQL implementation of the account link repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::AccountLink;
use crate::domain::repositories::AccountLinkRepository;
use crate::error::AppError;

/// Read-only Postgres lookups against the `account_links` table.
pub struct PgAccountLinkRepository {
    pool: Arc<PgPool>,
}

impl PgAccountLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountLinkRow {
    id: i64,
    msisdn: String,
    unique_shared_id: Option<String>,
    user_id: String,
}

impl From<AccountLinkRow> for AccountLink {
    fn from(row: AccountLinkRow) -> Self {
        AccountLink::new(row.id, row.msisdn, row.unique_shared_id, row.user_id)
    }
}

#[async_trait]
impl AccountLinkRepository for PgAccountLinkRepository {
    async fn find_by_shared_id(&self, shared_id: &str) -> Result<Option<AccountLink>, AppError> {
        let row = sqlx::query_as::<_, AccountLinkRow>(
            r#"
            SELECT id, msisdn, unique_shared_id, user_id
            FROM account_links
            WHERE unique_shared_id = $1
            "#,
        )
        .bind(shared_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_msisdn_and_shared_id(
        &self,
        msisdn: &str,
        shared_id: &str,
    ) -> Result<Option<AccountLink>, AppError> {
        let row = sqlx::query_as::<_, AccountLinkRow>(
            r#"
            SELECT id, msisdn, unique_shared_id, user_id
            FROM account_links
            WHERE msisdn = $1 AND unique_shared_id = $2
            "#,
        )
        .bind(msisdn)
        .bind(shared_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn find_by_msisdn(&self, msisdn: &str) -> Result<Option<AccountLink>, AppError> {
        let row = sqlx::query_as::<_, AccountLinkRow>(
            r#"
            SELECT id, msisdn, unique_shared_id, user_id
            FROM account_links
            WHERE msisdn = $1
            "#,
        )
        .bind(msisdn)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }
}

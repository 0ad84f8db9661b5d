//! HTTP implementation of the profile resolver.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::entities::{AccountStatus, UserProfile};
use crate::domain::gateways::ProfileResolver;
use crate::error::AppError;

/// Resolves subscriber profiles from the identity platform over HTTP.
///
/// A 404 from the platform is a regular `None`; only transport and server
/// failures surface as errors.
pub struct HttpProfileResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProfileResolver {
    /// Creates a resolver targeting the given base URL.
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ProfileResolver for HttpProfileResolver {
    async fn check_eligibility(&self, msisdn: &str) -> Result<Option<UserProfile>, AppError> {
        let url = format!("{}/profiles/{}", self.base_url, msisdn);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let profile = response.error_for_status()?.json::<UserProfile>().await?;
        Ok(Some(profile))
    }

    async fn account_status(&self, user_id: &str) -> Result<Option<AccountStatus>, AppError> {
        if user_id.is_empty() {
            return Ok(None);
        }

        let url = format!("{}/accounts/{}/status", self.base_url, user_id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let status = response.error_for_status()?.json::<AccountStatus>().await?;
        Ok(Some(status))
    }
}

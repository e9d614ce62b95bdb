//! Supabase implementation of the ProfileRepository trait.
//!
//! Talks to `{project}/rest/v1/{table}` with `apikey` and bearer headers.
//! Writes use `Prefer: return=representation` so the response carries the
//! rows that were actually updated; the conditional consume relies on that
//! to know whether its filters matched.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use pv_core::domain::entities::profile::Profile;
use pv_core::errors::DomainError;
use pv_core::repositories::ProfileRepository;
use pv_shared::ProfileStoreConfig;

use crate::InfrastructureError;

const SELECT_COLUMNS: &str = "id,email,email_verified,email_verification_code,code_expires_at";

/// Profile row as returned by PostgREST
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub email_verification_code: Option<String>,
    #[serde(default)]
    pub code_expires_at: Option<DateTime<Utc>>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            email: row.email,
            email_verified: row.email_verified.unwrap_or(false),
            email_verification_code: row.email_verification_code,
            code_expires_at: row.code_expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct PendingCodePatch<'a> {
    email_verification_code: &'a str,
    code_expires_at: String,
}

#[derive(Debug, Serialize)]
struct VerifiedPatch {
    email_verified: bool,
    email_verification_code: Option<String>,
    code_expires_at: Option<String>,
}

/// Supabase (PostgREST) implementation of ProfileRepository
#[derive(Clone)]
pub struct SupabaseProfileRepository {
    client: Client,
    base_url: String,
    service_role_key: String,
    table: String,
}

impl SupabaseProfileRepository {
    /// Create a repository from the store configuration
    ///
    /// Fails when the project URL or service role key is missing.
    pub fn new(config: &ProfileStoreConfig) -> Result<Self, InfrastructureError> {
        let base_url = config
            .supabase_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| InfrastructureError::Config("Supabase URL is not set".to_string()))?;
        let service_role_key = config
            .service_role_key
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config("Supabase service role key is not set".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        tracing::info!(
            base_url = %base_url,
            table = %config.table,
            "Supabase profile store initialized"
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_role_key: service_role_key.to_string(),
            table: config.table.clone(),
        })
    }

    /// REST endpoint for the profiles resource
    pub fn resource_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_role_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.service_role_key))
            .header(header::ACCEPT, "application/json")
    }

    /// Read the JSON row array, turning non-2xx statuses into errors
    async fn read_rows(response: Response) -> Result<Vec<ProfileRow>, InfrastructureError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::ProfileStore(format!(
                "request failed (status={}): {}",
                status.as_u16(),
                body
            )));
        }
        Ok(response.json::<Vec<ProfileRow>>().await?)
    }

    /// Collapse a lookup result to at most one profile
    ///
    /// Email is expected to be unique; more than one row is reported rather
    /// than silently picking one.
    pub fn single_profile(rows: Vec<ProfileRow>) -> Result<Option<Profile>, InfrastructureError> {
        let mut rows = rows.into_iter();
        match (rows.next(), rows.next()) {
            (None, _) => Ok(None),
            (Some(row), None) => Ok(Some(row.into())),
            (Some(_), Some(_)) => Err(InfrastructureError::ProfileStore(
                "multiple profiles share the same email".to_string(),
            )),
        }
    }

    fn timestamp(instant: DateTime<Utc>) -> String {
        instant.to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    async fn fetch_by_email(&self, email: &str) -> Result<Vec<ProfileRow>, InfrastructureError> {
        let request = self.client.get(self.resource_url()).query(&[
            ("select", SELECT_COLUMNS.to_string()),
            ("email", format!("eq.{}", email)),
            ("limit", "2".to_string()),
        ]);
        let response = self.authorized(request).send().await?;
        Self::read_rows(response).await
    }

    /// PATCH the rows matching `filters` and return them as updated
    async fn patch_rows<T: Serialize>(
        &self,
        filters: &[(&str, String)],
        body: &T,
    ) -> Result<Vec<ProfileRow>, InfrastructureError> {
        let request = self
            .client
            .patch(self.resource_url())
            .query(filters)
            .query(&[("select", SELECT_COLUMNS)])
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.authorized(request).send().await?;
        Self::read_rows(response).await
    }

    fn storage_error(action: &str, error: InfrastructureError) -> DomainError {
        tracing::error!(error = %error, action, "Supabase profile request failed");
        error.into()
    }
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
        self.fetch_by_email(email)
            .await
            .and_then(Self::single_profile)
            .map_err(|e| Self::storage_error("find_by_email", e))
    }

    async fn store_verification_code(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Profile, DomainError> {
        let patch = PendingCodePatch {
            email_verification_code: code,
            code_expires_at: Self::timestamp(expires_at),
        };

        let rows = self
            .patch_rows(&[("id", format!("eq.{}", id))], &patch)
            .await
            .map_err(|e| Self::storage_error("store_verification_code", e))?;

        rows.into_iter()
            .next()
            .map(Profile::from)
            .ok_or_else(DomainError::profile_not_found)
    }

    async fn consume_verification_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let patch = VerifiedPatch {
            email_verified: true,
            email_verification_code: None,
            code_expires_at: None,
        };
        let filters = [
            ("id", format!("eq.{}", id)),
            ("email_verification_code", format!("eq.{}", code)),
            ("code_expires_at", format!("gte.{}", Self::timestamp(now))),
        ];

        let rows = self
            .patch_rows(&filters, &patch)
            .await
            .map_err(|e| Self::storage_error("consume_verification_code", e))?;

        Ok(rows.len() == 1)
    }
}

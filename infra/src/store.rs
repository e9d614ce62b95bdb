//! Profile store backend selection
//!
//! The verification service is generic over its repository; the binary uses
//! this enum so the backend can be picked from configuration at startup.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use pv_core::domain::entities::profile::Profile;
use pv_core::errors::DomainError;
use pv_core::repositories::{InMemoryProfileRepository, ProfileRepository};
use pv_shared::{AppConfig, StoreBackend};

use crate::database::{DatabasePool, PostgresProfileRepository};
use crate::supabase::SupabaseProfileRepository;
use crate::InfrastructureError;

/// Profile repository chosen by configuration
#[derive(Clone)]
pub enum ProfileStore {
    Postgres(PostgresProfileRepository),
    Supabase(SupabaseProfileRepository),
    Memory(InMemoryProfileRepository),
}

impl ProfileStore {
    /// Build the configured backend
    ///
    /// The Postgres backend connects eagerly, checks the connection and
    /// applies the embedded migration when `database.run_migrations` is set.
    pub async fn from_config(config: &AppConfig) -> Result<Self, InfrastructureError> {
        match config.store.backend {
            StoreBackend::Postgres => {
                let pool = DatabasePool::new(config.database.clone()).await?;
                if !pool.health_check().await? {
                    return Err(InfrastructureError::Config(
                        "database did not answer the startup health check".to_string(),
                    ));
                }
                if config.database.run_migrations {
                    pool.run_migrations().await?;
                }
                Ok(Self::Postgres(PostgresProfileRepository::new(
                    pool.get_pool().clone(),
                )))
            }
            StoreBackend::Supabase => Ok(Self::Supabase(SupabaseProfileRepository::new(
                &config.store,
            )?)),
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory profile store; data is lost on restart");
                Self::memory_with(&config.store.seed_emails).await
            }
        }
    }

    /// In-memory store pre-populated with unverified profiles
    pub async fn memory_with(emails: &[String]) -> Result<Self, InfrastructureError> {
        let repository = InMemoryProfileRepository::new();
        for email in emails {
            repository
                .insert(Profile::new(email.clone()))
                .await
                .map_err(|e| InfrastructureError::Config(format!("Invalid seed profile: {}", e)))?;
        }
        if !emails.is_empty() {
            tracing::info!(count = emails.len(), "Seeded in-memory profile store");
        }
        Ok(Self::Memory(repository))
    }

    pub fn backend(&self) -> StoreBackend {
        match self {
            Self::Postgres(_) => StoreBackend::Postgres,
            Self::Supabase(_) => StoreBackend::Supabase,
            Self::Memory(_) => StoreBackend::Memory,
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
        match self {
            Self::Postgres(repo) => repo.find_by_email(email).await,
            Self::Supabase(repo) => repo.find_by_email(email).await,
            Self::Memory(repo) => repo.find_by_email(email).await,
        }
    }

    async fn store_verification_code(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Profile, DomainError> {
        match self {
            Self::Postgres(repo) => repo.store_verification_code(id, code, expires_at).await,
            Self::Supabase(repo) => repo.store_verification_code(id, code, expires_at).await,
            Self::Memory(repo) => repo.store_verification_code(id, code, expires_at).await,
        }
    }

    async fn consume_verification_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        match self {
            Self::Postgres(repo) => repo.consume_verification_code(id, code, now).await,
            Self::Supabase(repo) => repo.consume_verification_code(id, code, now).await,
            Self::Memory(repo) => repo.consume_verification_code(id, code, now).await,
        }
    }
}

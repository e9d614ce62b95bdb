//! In-memory implementation of ProfileRepository
//!
//! Backs local development and the test suites. All mutations happen under a
//! single write lock, which gives the same all-or-nothing guarantees as the
//! conditional updates in the SQL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

use super::trait_::ProfileRepository;

/// In-memory profile repository
#[derive(Clone)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryProfileRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Insert a profile, rejecting duplicate ids and emails
    pub async fn insert(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;

        if profiles.contains_key(&profile.id) {
            return Err(DomainError::Validation {
                message: format!("Profile {} already exists", profile.id),
            });
        }
        if profiles.values().any(|p| p.email == profile.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    /// Fetch a profile by id
    pub async fn get(&self, id: Uuid) -> Option<Profile> {
        self.profiles.read().await.get(&id).cloned()
    }

    /// Make every subsequent write fail with a storage error
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    fn check_writable(&self) -> Result<(), DomainError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::Storage {
                message: "in-memory store is rejecting writes".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.email == email).cloned())
    }

    async fn store_verification_code(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Profile, DomainError> {
        self.check_writable()?;
        let mut profiles = self.profiles.write().await;

        let profile = profiles.get_mut(&id).ok_or_else(DomainError::profile_not_found)?;
        profile.set_pending_code(code, expires_at);
        Ok(profile.clone())
    }

    async fn consume_verification_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        self.check_writable()?;
        let mut profiles = self.profiles.write().await;

        let Some(profile) = profiles.get_mut(&id) else {
            return Ok(false);
        };
        if profile.check_code(code, now).is_err() {
            return Ok(false);
        }

        profile.complete_verification();
        Ok(true)
    }
}

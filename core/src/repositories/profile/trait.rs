//! Profile repository trait defining the interface for profile persistence.
//!
//! The verification flow only ever touches three things on a profile: the
//! lookup by email, the pending code with its expiry, and the verified flag.
//! Implementations live in the infrastructure layer (PostgreSQL, the hosted
//! REST store) plus the in-memory store in this crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

/// Repository trait for Profile persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use chrono::{DateTime, Utc};
/// use uuid::Uuid;
/// use pv_core::repositories::ProfileRepository;
/// use pv_core::domain::entities::profile::Profile;
/// use pv_core::errors::DomainError;
///
/// struct SqlProfileRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl ProfileRepository for SqlProfileRepository {
///     async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn store_verification_code(&self, id: Uuid, code: &str, expires_at: DateTime<Utc>) -> Result<Profile, DomainError> { unimplemented!() }
/// #   async fn consume_verification_code(&self, id: Uuid, code: &str, now: DateTime<Utc>) -> Result<bool, DomainError> { unimplemented!() }
/// }
/// ```
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile registered under an email address
    ///
    /// Matching is exact: no trimming, no case folding.
    ///
    /// # Returns
    /// * `Ok(Some(Profile))` - Profile found
    /// * `Ok(None)` - No profile has this email
    /// * `Err(DomainError::Storage)` - Store unreachable, or the email is
    ///   unexpectedly shared by several profiles
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, DomainError>;

    /// Persist a new pending code and its expiry, replacing any previous one
    ///
    /// Both fields are written in a single update. `email_verified` is not
    /// changed.
    ///
    /// # Returns
    /// * `Ok(Profile)` - The profile as stored after the update
    /// * `Err(DomainError::NotFound)` - The profile no longer exists
    /// * `Err(DomainError::Storage)` - The write failed
    async fn store_verification_code(
        &self,
        id: Uuid,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<Profile, DomainError>;

    /// Atomically mark the email verified and clear the pending code
    ///
    /// The update applies only while the stored code still equals `code`
    /// and has not expired at `now`. Two concurrent calls with the same
    /// code cannot both succeed.
    ///
    /// # Returns
    /// * `Ok(true)` - The update applied
    /// * `Ok(false)` - The stored code changed, expired or was already consumed
    /// * `Err(DomainError::Storage)` - The write failed
    async fn consume_verification_code(
        &self,
        id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}

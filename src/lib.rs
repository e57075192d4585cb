//! Credcache - Disk-backed caching for short-lived cloud session credentials
//!
//! Wraps a cloud provider session and transparently serves cached temporary
//! credentials, probing the provider for liveness and refreshing on demand.
//! One cache file per profile identity; writes are whole-file atomic
//! replaces, but no cross-process locking is provided. Callers sharing a
//! profile across processes must coordinate externally.

pub mod cache;
pub mod error;
pub mod record;
pub mod session;
pub mod wrapper;

pub use cache::CredentialCache;
pub use error::{CredCacheError, CredCacheResult, SessionError};
pub use record::CredentialRecord;
pub use session::{ClientOptions, IssuedCredentials, ProviderSession};
pub use wrapper::{CacheOptions, CachingSession};

//! Error types for credcache
//!
//! All modules use `CredCacheResult<T>` as their return type.
//!
//! Locally recoverable faults (an unreadable cached record, a failed identity
//! probe) never surface here: they are absorbed at the call site and treated
//! as a cache miss or an invalid record. Only faults that block forward
//! progress propagate to callers, such as the provider refusing to issue
//! credentials or a failed cache write after an explicit refresh.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for credcache operations
pub type CredCacheResult<T> = Result<T, CredCacheError>;

/// Opaque error produced by the wrapped provider session.
///
/// The collaborator's own error type is preserved as the source so the
/// underlying fault stays inspectable; credcache never translates it.
pub type SessionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// All errors that can occur in credcache
#[derive(Error, Debug)]
pub enum CredCacheError {
    // Cache file errors
    #[error("Failed to read cache file {path}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write cache file {path}")]
    CachePersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Record integrity errors
    #[error("Unparseable expiry stamp {value:?} in cached record")]
    ExpiryParse {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    // Provider errors
    #[error("Credential issuance failed")]
    CredentialFetch {
        #[source]
        source: SessionError,
    },

    #[error("Client construction failed for service {service:?}")]
    ClientBuild {
        service: String,
        #[source]
        source: SessionError,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CredCacheError {
    /// Create a cache read error with the offending path
    pub fn cache_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheRead {
            path: path.into(),
            source,
        }
    }

    /// Create a cache persist error with the offending path
    pub fn cache_persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CachePersist {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CredCacheError::cache_read(
            "/tmp/dev_cached_creds.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/dev_cached_creds.json"));
    }

    #[test]
    fn expiry_parse_keeps_offending_value() {
        let source =
            chrono::NaiveDateTime::parse_from_str("garbage", "%Y-%m-%dT%H:%M:%S%.6f").unwrap_err();
        let err = CredCacheError::ExpiryParse {
            value: "garbage".to_string(),
            source,
        };
        assert!(err.to_string().contains("garbage"));
    }
}

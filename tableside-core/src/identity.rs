//! Caller identity resolution.
//!
//! Credentials are opaque to the feed: the resolver either produces a
//! [`UserId`] or nothing. Resolution failure is non-fatal to a feed request;
//! the pipeline degrades to an unpersonalized ranking.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

/// Identity of a caller, used to key the interaction log.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Wrap an identity string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors surfaced by an [`IdentityResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The credential was invalid, expired, or could not be checked.
    #[error("credential rejected: {message}")]
    Rejected {
        /// Human-readable description of the failure.
        message: String,
    },
}

/// Resolve an opaque credential to a caller identity.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Return the identity behind `credential`, or `None` for an anonymous
    /// but well-formed credential.
    async fn resolve(&self, credential: &str) -> Result<Option<UserId>, IdentityError>;
}

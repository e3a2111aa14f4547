//! Error types for host collaborators.

use thiserror::Error;

/// Failure reported by a host collaborator (scrolling, focus, key interception).
///
/// The controller logs these and carries on; selection state is never rolled back.
#[derive(Debug, Clone, Error)]
pub enum HostError {
    /// The host element the request targeted no longer exists.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// No key-interception subscription exists for the element.
    #[error("no key subscription for element: {0}")]
    NotSubscribed(String),

    /// The host backend failed to carry out the request.
    #[error("host backend failure: {0}")]
    Backend(String),
}

impl From<std::io::Error> for HostError {
    fn from(err: std::io::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

//! Error types for kubeconfig and Secret conversion

use kube::config::KubeconfigError;
use thiserror::Error;

use crate::adapters::secrets::SecretRef;

/// Result type for conversions
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for conversions
///
/// Read path failures carry the identity of the Secret they came from, since
/// Secrets can be edited out from under the caller. Write path failures only
/// wrap the encoder error.
#[derive(Debug, Error)]
pub enum Error {
    /// The Secret has no entry under the expected key
    #[error("key {key:?} not found in secret {secret}")]
    KeyNotFound { key: String, secret: SecretRef },

    /// The entry exists but does not parse as a kubeconfig
    #[error("secret {secret} holds an invalid kubeconfig: {source}")]
    InvalidKubeconfig {
        secret: SecretRef,
        #[source]
        source: serde_yaml::Error,
    },

    /// The kubeconfig could not be encoded
    #[error("failed to write kubeconfig: {0}")]
    Write(#[source] serde_yaml::Error),

    /// A decoded kubeconfig could not be resolved into client configuration
    #[error("failed to load client configuration from secret {secret}: {source}")]
    ClientConfig {
        secret: SecretRef,
        #[source]
        source: KubeconfigError,
    },

    /// Manifest error
    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl Error {
    /// True when the Secret lacked the requested key
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// True when the Secret's data was not a valid kubeconfig
    pub fn is_invalid_kubeconfig(&self) -> bool {
        matches!(self, Error::InvalidKubeconfig { .. })
    }

    /// The Secret this error refers to, if any
    pub fn secret(&self) -> Option<&SecretRef> {
        match self {
            Error::KeyNotFound { secret, .. }
            | Error::InvalidKubeconfig { secret, .. }
            | Error::ClientConfig { secret, .. } => Some(secret),
            Error::Write(_) | Error::Manifest(_) => None,
        }
    }
}

// Wrapped errors have no equality of their own, so they compare by message.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Error::KeyNotFound { key, secret },
                Error::KeyNotFound {
                    key: other_key,
                    secret: other_secret,
                },
            ) => key == other_key && secret == other_secret,
            (
                Error::InvalidKubeconfig { secret, source },
                Error::InvalidKubeconfig {
                    secret: other_secret,
                    source: other_source,
                },
            ) => secret == other_secret && source.to_string() == other_source.to_string(),
            (Error::Write(e), Error::Write(other)) => e.to_string() == other.to_string(),
            (
                Error::ClientConfig { secret, source },
                Error::ClientConfig {
                    secret: other_secret,
                    source: other_source,
                },
            ) => secret == other_secret && source.to_string() == other_source.to_string(),
            (Error::Manifest(msg), Error::Manifest(other)) => msg == other,
            _ => false,
        }
    }
}

//! Secret identity and data lookup

use std::fmt;

use k8s_openapi::api::core::v1::Secret;

use crate::{Error, Result};

/// Namespace and name of a Secret
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SecretRef {
    pub namespace: String,
    pub name: String,
}

impl SecretRef {
    /// Create a new secret reference
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Identity of an existing Secret. Unset metadata becomes an empty string.
    pub fn from_secret(secret: &Secret) -> Self {
        Self {
            namespace: secret.metadata.namespace.clone().unwrap_or_default(),
            name: secret.metadata.name.clone().unwrap_or_default(),
        }
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Get the raw bytes stored under `key`
pub fn secret_data<'a>(secret: &'a Secret, key: &str) -> Result<&'a [u8]> {
    secret
        .data
        .as_ref()
        .and_then(|data| data.get(key))
        .map(|value| value.0.as_slice())
        .ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
            secret: SecretRef::from_secret(secret),
        })
}

//! Kubeconfig Secret conversion
//!
//! Stores a kubeconfig in a Kubernetes Secret under a fixed data key and reads
//! it back as client configuration. Fetching and saving the Secret is left to
//! the caller's own client.

pub mod adapters;
pub mod error;

pub use adapters::{
    kubeconfig_to_secret, secret_to_kubeconfig, secret_to_kubeconfig_with_key, SecretKubeconfig,
    SecretRef, KUBECONFIG_KEY,
};
pub use error::{Error, Result};

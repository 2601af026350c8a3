//! Adapters between kubeconfigs, Secrets and their manifests

pub mod client_config;
pub mod kubeconfig_secret;
pub mod manifest;
pub mod secrets;

pub use client_config::SecretKubeconfig;
pub use kubeconfig_secret::{
    kubeconfig_to_secret, secret_to_kubeconfig, secret_to_kubeconfig_with_key, KUBECONFIG_KEY,
};
pub use secrets::SecretRef;

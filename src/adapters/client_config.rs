//! Client configuration decoded from a Secret

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config;
use tracing::debug;

use super::secrets::SecretRef;
use crate::{Error, Result};

/// A kubeconfig read out of a Secret.
///
/// Holds the decoded document as-is. Turning it into a [`kube::Config`]
/// (context selection, credential loading) only happens in
/// [`SecretKubeconfig::client_config`], and happens again on every call.
#[derive(Clone, Debug)]
pub struct SecretKubeconfig {
    secret: SecretRef,
    kubeconfig: Kubeconfig,
}

impl SecretKubeconfig {
    pub(crate) fn new(secret: SecretRef, kubeconfig: Kubeconfig) -> Self {
        Self { secret, kubeconfig }
    }

    /// Secret the kubeconfig was read from
    pub fn secret(&self) -> &SecretRef {
        &self.secret
    }

    /// The decoded kubeconfig
    pub fn raw(&self) -> &Kubeconfig {
        &self.kubeconfig
    }

    pub fn into_raw(self) -> Kubeconfig {
        self.kubeconfig
    }

    pub fn current_context(&self) -> Option<&str> {
        self.kubeconfig.current_context.as_deref()
    }

    /// Default namespace of the context `options` selects, falling back to
    /// the current context
    pub fn namespace(&self, options: &KubeConfigOptions) -> Option<&str> {
        let context_name = options
            .context
            .as_deref()
            .or(self.kubeconfig.current_context.as_deref())?;

        self.kubeconfig
            .contexts
            .iter()
            .find(|named| named.name == context_name)
            .and_then(|named| named.context.as_ref())
            .and_then(|context| context.namespace.as_deref())
    }

    /// Resolve into client configuration for the selected context
    pub async fn client_config(&self, options: &KubeConfigOptions) -> Result<Config> {
        let config = Config::from_custom_kubeconfig(self.kubeconfig.clone(), options)
            .await
            .map_err(|e| Error::ClientConfig {
                secret: self.secret.clone(),
                source: e,
            })?;

        debug!(
            "Resolved client configuration from secret {}: cluster={}",
            self.secret, config.cluster_url
        );

        Ok(config)
    }
}

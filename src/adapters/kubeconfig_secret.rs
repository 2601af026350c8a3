//! Kubeconfig to Secret conversion and back

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use kube::config::Kubeconfig;
use tracing::debug;

use super::client_config::SecretKubeconfig;
use super::secrets::{secret_data, SecretRef};
use crate::{Error, Result};

/// Data key a kubeconfig is stored under
pub const KUBECONFIG_KEY: &str = "kubeconfig";

/// Build a Secret holding `kubeconfig` under [`KUBECONFIG_KEY`]
pub fn kubeconfig_to_secret(secret: &SecretRef, kubeconfig: &Kubeconfig) -> Result<Secret> {
    let encoded = serde_yaml::to_string(kubeconfig).map_err(Error::Write)?;

    debug!(
        "Encoded kubeconfig into secret {} ({} bytes)",
        secret,
        encoded.len()
    );

    let mut data = BTreeMap::new();
    data.insert(KUBECONFIG_KEY.to_string(), ByteString(encoded.into_bytes()));

    Ok(Secret {
        metadata: ObjectMeta {
            name: Some(secret.name.clone()),
            namespace: Some(secret.namespace.clone()),
            ..Default::default()
        },
        data: Some(data),
        ..Default::default()
    })
}

/// Read the kubeconfig stored under [`KUBECONFIG_KEY`]
pub fn secret_to_kubeconfig(secret: &Secret) -> Result<SecretKubeconfig> {
    secret_to_kubeconfig_with_key(secret, KUBECONFIG_KEY)
}

/// Read the kubeconfig stored under `key`
pub fn secret_to_kubeconfig_with_key(secret: &Secret, key: &str) -> Result<SecretKubeconfig> {
    let bytes = secret_data(secret, key)?;
    let source = SecretRef::from_secret(secret);

    let kubeconfig: Kubeconfig =
        serde_yaml::from_slice(bytes).map_err(|e| Error::InvalidKubeconfig {
            secret: source.clone(),
            source: e,
        })?;

    debug!("Decoded kubeconfig from secret {} key {:?}", source, key);

    Ok(SecretKubeconfig::new(source, kubeconfig))
}

//! Secret and kubeconfig manifest rendering

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::config::Kubeconfig;

use crate::{Error, Result};

/// Manifest output format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Render a Secret manifest
pub fn render_secret(secret: &Secret, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => serde_yaml::to_string(secret)
            .map_err(|e| Error::Manifest(format!("Failed to serialize secret: {}", e))),
        OutputFormat::Json => serde_json::to_string_pretty(secret)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| Error::Manifest(format!("Failed to serialize secret: {}", e))),
    }
}

/// Parse a YAML or JSON Secret manifest.
///
/// `stringData` entries are folded into `data` and win over existing keys,
/// the same way the API server applies them.
pub fn parse_secret(text: &str) -> Result<Secret> {
    let mut secret: Secret = serde_yaml::from_str(text)
        .map_err(|e| Error::Manifest(format!("Failed to parse secret: {}", e)))?;

    if let Some(string_data) = secret.string_data.take() {
        let data = secret.data.get_or_insert_with(Default::default);
        for (key, value) in string_data {
            data.insert(key, ByteString(value.into_bytes()));
        }
    }

    Ok(secret)
}

/// Render a kubeconfig as YAML
pub fn render_kubeconfig(kubeconfig: &Kubeconfig) -> Result<String> {
    serde_yaml::to_string(kubeconfig).map_err(Error::Write)
}

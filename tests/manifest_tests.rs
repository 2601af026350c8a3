//! Integration tests for Secret manifest rendering and parsing

use kube::config::Kubeconfig;
use kubeconfig_secret::adapters::manifest::{
    parse_secret, render_kubeconfig, render_secret, OutputFormat,
};
use kubeconfig_secret::{kubeconfig_to_secret, secret_to_kubeconfig, SecretRef, KUBECONFIG_KEY};

// ============================================================================
// Test Helpers
// ============================================================================

const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: local
  cluster:
    server: https://127.0.0.1:6443
    insecure-skip-tls-verify: true
users:
- name: dev
  user:
    username: dev
    password: hunter2
contexts:
- name: local-dev
  context:
    cluster: local
    user: dev
current-context: local-dev
"#;

fn kubeconfig() -> Kubeconfig {
    Kubeconfig::from_yaml(KUBECONFIG).expect("fixture kubeconfig should parse")
}

fn target() -> SecretRef {
    SecretRef::new("platform", "local-kubeconfig")
}

fn as_value(kubeconfig: &Kubeconfig) -> serde_yaml::Value {
    serde_yaml::to_value(kubeconfig).expect("kubeconfig should serialize")
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn yaml_manifest_is_a_v1_secret() {
    let secret = kubeconfig_to_secret(&target(), &kubeconfig()).unwrap();
    let manifest = render_secret(&secret, OutputFormat::Yaml).unwrap();

    assert!(manifest.contains("apiVersion: v1"));
    assert!(manifest.contains("kind: Secret"));
    assert!(manifest.contains("name: local-kubeconfig"));
    assert!(manifest.contains("namespace: platform"));
}

#[test]
fn json_manifest_is_a_v1_secret() {
    let secret = kubeconfig_to_secret(&target(), &kubeconfig()).unwrap();
    let manifest = render_secret(&secret, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(value["apiVersion"], "v1");
    assert_eq!(value["kind"], "Secret");
    assert_eq!(value["metadata"]["namespace"], "platform");
    assert!(value["data"][KUBECONFIG_KEY].is_string());
}

#[test]
fn rendered_kubeconfig_parses_back() {
    let rendered = render_kubeconfig(&kubeconfig()).unwrap();
    let parsed = Kubeconfig::from_yaml(&rendered).unwrap();

    assert_eq!(as_value(&parsed), as_value(&kubeconfig()));
}

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn rendered_manifests_parse_back_to_same_secret() {
    let secret = kubeconfig_to_secret(&target(), &kubeconfig()).unwrap();

    for format in [OutputFormat::Yaml, OutputFormat::Json] {
        let manifest = render_secret(&secret, format).unwrap();
        let parsed = parse_secret(&manifest).unwrap();
        assert_eq!(parsed, secret, "format {:?} should round trip", format);
    }
}

#[test]
fn manifest_round_trip_keeps_kubeconfig() {
    let secret = kubeconfig_to_secret(&target(), &kubeconfig()).unwrap();
    let manifest = render_secret(&secret, OutputFormat::Yaml).unwrap();

    let decoded = secret_to_kubeconfig(&parse_secret(&manifest).unwrap()).unwrap();

    assert_eq!(as_value(decoded.raw()), as_value(&kubeconfig()));
    assert_eq!(decoded.secret(), &target());
}

#[test]
fn string_data_is_folded_into_data() {
    let manifest = r#"
apiVersion: v1
kind: Secret
metadata:
  name: handwritten
  namespace: default
stringData:
  kubeconfig: |
    apiVersion: v1
    kind: Config
    clusters: []
    users: []
    contexts: []
    current-context: ""
"#;

    let secret = parse_secret(manifest).unwrap();
    assert!(secret.string_data.is_none());
    assert!(secret.data.as_ref().unwrap().contains_key(KUBECONFIG_KEY));

    let decoded = secret_to_kubeconfig(&secret).unwrap();
    assert_eq!(decoded.secret(), &SecretRef::new("default", "handwritten"));
    assert!(decoded.raw().clusters.is_empty());
    assert_eq!(decoded.current_context(), Some(""));
}

#[test]
fn string_data_overrides_data() {
    let manifest = r#"
apiVersion: v1
kind: Secret
metadata:
  name: mixed
  namespace: default
data:
  kubeconfig: aGVsbG8gd29ybGQ/
stringData:
  kubeconfig: "kind: Config"
"#;

    let secret = parse_secret(manifest).unwrap();
    let data = secret.data.unwrap();

    assert_eq!(data[KUBECONFIG_KEY].0, b"kind: Config".to_vec());
}

#[test]
fn malformed_manifest_is_rejected() {
    let err = parse_secret("metadata: [").unwrap_err();

    assert!(err.to_string().contains("Failed to parse secret"));
    assert!(err.secret().is_none());
}

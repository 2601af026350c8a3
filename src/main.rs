//! kubeconfig-secret
//!
//! Command line entry point. Encodes a kubeconfig into a Secret manifest and
//! decodes a Secret manifest back into a kubeconfig.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kubeconfig_secret::adapters::manifest::{self, OutputFormat};
use kubeconfig_secret::{kubeconfig_to_secret, secret_to_kubeconfig_with_key, SecretRef};

/// Default log filter
const DEFAULT_LOG_FILTER: &str = "warn,kubeconfig_secret=info";

#[derive(Debug, Parser)]
#[command(name = "kubeconfig-secret", version, about)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Wrap a kubeconfig in a Secret manifest
    Encode {
        /// Secret name
        #[arg(long)]
        name: String,

        /// Secret namespace
        #[arg(long, default_value = "default")]
        namespace: String,

        /// Kubeconfig to read, defaults to $KUBECONFIG or ~/.kube/config
        #[arg(long)]
        kubeconfig: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },

    /// Print the kubeconfig held by a Secret manifest
    Decode {
        /// Secret manifest to read, "-" or omitted for stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Data key holding the kubeconfig
        #[arg(long, env = "KUBECONFIG_SECRET_KEY", default_value = kubeconfig_secret::KUBECONFIG_KEY)]
        key: String,

        /// Resolve the kubeconfig into client configuration before printing
        #[arg(long)]
        verify: bool,

        /// Context to resolve with --verify instead of current-context
        #[arg(long, requires = "verify")]
        context: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match cli.command {
        Command::Encode {
            name,
            namespace,
            kubeconfig,
            output,
        } => {
            let config = match &kubeconfig {
                Some(path) => Kubeconfig::read_from(path)
                    .with_context(|| format!("Failed to read kubeconfig {}", path.display()))?,
                None => Kubeconfig::read().context("Failed to read default kubeconfig")?,
            };

            let target = SecretRef::new(namespace, name);
            let secret = kubeconfig_to_secret(&target, &config)?;
            print!("{}", manifest::render_secret(&secret, output)?);

            info!("Encoded kubeconfig into secret {}", target);
        }
        Command::Decode {
            file,
            key,
            verify,
            context,
        } => {
            let text = read_input(file.as_ref())?;
            let secret = manifest::parse_secret(&text)?;
            let decoded = secret_to_kubeconfig_with_key(&secret, &key)?;

            if verify {
                let options = KubeConfigOptions {
                    context,
                    ..Default::default()
                };
                let config = decoded.client_config(&options).await?;
                info!(
                    "Secret {} resolves to cluster {} (namespace {})",
                    decoded.secret(),
                    config.cluster_url,
                    config.default_namespace
                );
            }

            print!("{}", manifest::render_kubeconfig(decoded.raw())?);
        }
    }

    Ok(())
}

/// Initialize tracing subscriber. Logs go to stderr, stdout carries manifests.
fn init_tracing(json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read secret manifest from stdin")?;
            Ok(text)
        }
    }
}

//! Metrack CLI
//!
//! Command-line interface for encoding and decoding custom metrics.
//!
//! # Usage
//!
//! ```bash
//! metrack --help
//! metrack encode --name precision --value 0.87 --metric-version v1
//! metrack decode CglwcmVjaXNpb24R16NwPQrX6z8aAnYx
//! metrack --encoding hex from-json '{"name":"recall","value":0.9,"version":"v2"}'
//! ```

#![deny(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::config::{CodecConfig, WireEncoding};
use shared::models::CustomMetric;
use shared::proto::conversions::{decode_text, encode_text};

/// Metrack CLI - encode and decode custom metrics
#[derive(Parser)]
#[command(name = "metrack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text encoding of the protobuf bytes (base64 or hex).
    /// Falls back to `METRACK_ENCODING`, then base64.
    #[arg(short, long, global = true)]
    encoding: Option<WireEncoding>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a custom metric into its wire form
    Encode {
        /// Metric name
        #[arg(long)]
        name: String,
        /// Metric value
        #[arg(long, allow_negative_numbers = true)]
        value: f64,
        /// Model version the metric belongs to
        #[arg(long = "metric-version")]
        metric_version: String,
    },
    /// Decode a wire-form custom metric and print it as JSON
    Decode {
        /// Encoded message
        text: String,
    },
    /// Validate a JSON custom metric and print its wire form
    FromJson {
        /// JSON object with `name`, `value` and `version`
        json: String,
    },
}

impl Cli {
    fn codec_config(&self) -> Result<CodecConfig> {
        match self.encoding {
            Some(encoding) => Ok(CodecConfig { encoding }),
            None => Ok(CodecConfig::from_env()?),
        }
    }
}

fn run(cli: &Cli) -> Result<Option<String>> {
    let config = cli.codec_config()?;
    tracing::debug!(encoding = %config.encoding, "Using codec configuration");

    let output = match &cli.command {
        Some(Commands::Encode {
            name,
            value,
            metric_version,
        }) => {
            let metric = CustomMetric::new(name.as_str(), *value, metric_version.as_str());
            Some(encode_text(&metric, config.encoding))
        }
        Some(Commands::Decode { text }) => {
            let metric = decode_text(text, config.encoding)
                .with_context(|| format!("Failed to decode {} message", config.encoding))?;
            Some(serde_json::to_string_pretty(&metric)?)
        }
        Some(Commands::FromJson { json }) => {
            let metric: CustomMetric =
                serde_json::from_str(json).context("Invalid custom metric JSON")?;
            tracing::info!(%metric, "Validated custom metric");
            Some(encode_text(&metric, config.encoding))
        }
        None => None,
    };

    Ok(output)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli)? {
        Some(output) => println!("{output}"),
        None => {
            println!("Metrack CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

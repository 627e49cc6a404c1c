//! CLI for the Colophon metadata extraction service.
//!
//! Both subcommands read the same environment configuration as the server
//! (`API_KEY`, `MISTRAL_API_KEY`, optional `COLOPHON_*` overrides).

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use colophon::{MistralOcr, ServiceConfig, extract_metadata};

/// Bibliographic metadata extraction over hosted OCR document annotation
#[derive(Parser)]
#[command(name = "colophon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind, overriding COLOPHON_HOST
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind, overriding COLOPHON_PORT
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Extract metadata from a single document URL and print it as JSON
    Extract {
        /// Document URL to submit for annotated OCR
        url: String,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ServiceConfig::from_env().context("failed to load configuration")?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let ocr = Arc::new(MistralOcr::new(&config.mistral_api_key, config.request_timeout)?);
            colophon::api::serve(config, ocr).await?;
        }
        Commands::Extract { url } => {
            let ocr = MistralOcr::new(&config.mistral_api_key, config.request_timeout)?;
            let metadata = extract_metadata(&ocr, &url).await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
    }

    Ok(())
}

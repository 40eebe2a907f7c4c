//! # Paymail Node
//!
//! Command-line entry point.
//!
//! ```text
//! paymail-node brfc id --title "BRFC Specifications" --author "andy (nChain)" --version 1
//! paymail-node brfc check --file brfcs.json
//! paymail-node receive --address alice@example.com --file tx.json --known alice@example.com
//! ```
//!
//! `receive` reads its policy from `PM_DOMAINS`, `PM_DOMAIN_VALIDATION` and
//! `PM_SENDER_VALIDATION`; `--domain` and `--sender-validation` extend it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use paymail_node::commands::{self, ReceiveOptions};
use paymail_node::NodeConfig;
use pm_01_brfc::BrfcIdScheme;
use pm_02_p2p_receive::domain::sanitize::sanitize_domain;
use pm_02_p2p_receive::RequestContext;

/// Paymail BRFC tooling and P2P transaction receipt.
#[derive(Parser, Debug)]
#[command(name = "paymail-node")]
#[command(about = "Paymail BRFC ids and P2P transaction receipt")]
struct Cli {
    /// Log filter, overrides PM_LOG_LEVEL / RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// BRFC identifiers
    Brfc {
        #[command(subcommand)]
        command: BrfcCommand,
    },
    /// Submit one P2P transaction body to the receipt pipeline
    Receive {
        /// Recipient paymail
        #[arg(short, long)]
        address: String,

        /// JSON request body ({"hex", "reference", "metadata"})
        #[arg(short, long)]
        file: PathBuf,

        /// Paymail present in the directory (repeatable)
        #[arg(short, long)]
        known: Vec<String>,

        /// Additional allowed domain (repeatable)
        #[arg(short, long)]
        domain: Vec<String>,

        /// Require a sender signature
        #[arg(long)]
        sender_validation: bool,

        /// Client IP recorded in the request metadata
        #[arg(long)]
        ip: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum BrfcCommand {
    /// Generate the id of one specification
    Id {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long)]
        version: String,
        /// 5-byte base64 id instead of the bsvalias hex id
        #[arg(long)]
        compact: bool,
    },
    /// Validate a JSON list of specifications
    Check {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(long)]
        compact: bool,
    },
}

fn scheme(compact: bool) -> BrfcIdScheme {
    if compact {
        BrfcIdScheme::Compact
    } else {
        BrfcIdScheme::Bsvalias
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = NodeConfig::from_env()?;
    if let Some(level) = cli.log_level {
        config.telemetry = config.telemetry.with_log_level(level);
    }
    paymail_telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Command::Brfc { command } => match command {
            BrfcCommand::Id {
                title,
                author,
                version,
                compact,
            } => {
                let id = commands::brfc::generate(&title, &author, &version, scheme(compact))?;
                println!("{id}");
            }
            BrfcCommand::Check { file, compact } => {
                let json = read_file(&file)?;
                for line in commands::brfc::check(&json, scheme(compact))? {
                    println!("{line}");
                }
            }
        },
        Command::Receive {
            address,
            file,
            known,
            domain,
            sender_validation,
            ip,
        } => {
            config
                .receiver
                .paymail_domains
                .extend(domain.iter().map(|d| sanitize_domain(d)));
            if sender_validation {
                config.receiver = config.receiver.with_sender_validation(true);
            }
            debug!(receiver = ?config.receiver, "receiver configuration");

            let options = ReceiveOptions {
                address,
                body: read_file(&file)?,
                known,
                context: RequestContext {
                    ip_address: ip,
                    user_agent: Some(format!("paymail-node/{}", env!("CARGO_PKG_VERSION"))),
                    request_uri: None,
                },
            };
            let response = commands::receive::run(&config, &options).await?;

            println!("{}", serde_json::to_string_pretty(&response.body)?);
            if !response.is_success() {
                eprintln!("status {}", response.status);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

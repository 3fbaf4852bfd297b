//! grantkey CLI
//!
//! Command-line tool for building and inspecting composite keys.

use clap::{Parser, Subcommand};
use grantkey::inspect;
use grantkey::key;
use grantkey::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// grantkey CLI
#[derive(Parser, Debug)]
#[command(name = "grantkey-cli")]
#[command(about = "Encode and decode length-prefixed grant keys")]
#[command(version)]
struct Args {
    /// Record family prefix byte (hex)
    #[arg(short, long, default_value = "01")]
    prefix: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a key and print it as hex
    Encode {
        /// Primary identifier (hex)
        #[arg(long)]
        primary: String,

        /// Secondary identifier (hex)
        #[arg(long)]
        secondary: String,

        /// Label text
        #[arg(long, default_value = "")]
        label: String,
    },

    /// Split a hex key into its fields
    Decode {
        /// The key (hex)
        key: String,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,grantkey=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let prefix = inspect::parse_prefix(&args.prefix)?;

    match args.command {
        Commands::Encode {
            primary,
            secondary,
            label,
        } => {
            let encoded = inspect::encode_hex(prefix, &primary, &secondary, &label)?;
            tracing::debug!(len = encoded.len() / 2, "encoded key");
            println!("{}", encoded);
        }
        Commands::Decode { key: raw } => {
            let bytes = inspect::parse_hex(&raw)?;
            let decoded = key::decode(&bytes)?;

            if decoded.prefix != prefix {
                tracing::warn!(
                    "prefix 0x{:02x} does not match expected 0x{:02x}",
                    decoded.prefix,
                    prefix
                );
            }

            println!("{}", inspect::render(&decoded));
        }
    }
    Ok(())
}

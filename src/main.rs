// Written in 2025 by Joshua Doman <joshsdoman@gmail.com>
// SPDX-License-Identifier: CC0-1.0

use anyhow::{Context, Result, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use secret_shares::SeededRng;

#[derive(Parser)]
#[clap(name = "secret-shares")]
#[clap(version = "0.1.0")]
#[clap(about = "CLI tool to split a secret into threshold shares and combine them.", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Splits a secret into shares, prints one encoded share per line
    Split(SplitArgs),
    /// Combines encoded shares and prints the recovered secret
    Combine(CombineArgs),
}

#[derive(Args)]
struct SplitArgs {
    /// The secret to split, or "-" to read it from stdin
    secret: String,
    /// Number of shares to produce (2 to 255)
    #[clap(short = 'n', long)]
    shares: usize,
    /// Number of shares required to recover the secret (2 to shares)
    #[clap(short, long)]
    threshold: usize,
    /// Encoding of the secret
    #[clap(long, value_enum, default_value_t = SecretEncoding::Text)]
    input: SecretEncoding,
    /// Encoding of the printed shares
    #[clap(long, value_enum, default_value_t = ShareEncoding::Hex)]
    output: ShareEncoding,
    /// Hex-encoded 32-byte seed for reproducible shares.
    /// Anyone who knows the seed can recover the secret from a single share.
    #[clap(long)]
    seed: Option<String>,
}

#[derive(Args)]
struct CombineArgs {
    /// Encoded shares
    #[clap(required = true)]
    shares: Vec<String>,
    /// Encoding of the shares
    #[clap(long, value_enum, default_value_t = ShareEncoding::Hex)]
    input: ShareEncoding,
    /// Encoding of the printed secret
    #[clap(long, value_enum, default_value_t = SecretEncoding::Text)]
    output: SecretEncoding,
}

#[derive(Clone, Copy, ValueEnum)]
enum SecretEncoding {
    /// UTF-8 text
    Text,
    /// Hexadecimal
    Hex,
    /// Standard Base64 with padding
    Base64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShareEncoding {
    /// Hexadecimal
    Hex,
    /// Standard Base64 with padding
    Base64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => handle_split(args),
        Commands::Combine(args) => handle_combine(args),
    }
}

fn handle_split(args: SplitArgs) -> Result<()> {
    let raw = if args.secret == "-" {
        read_secret(std::io::stdin())?
    } else {
        args.secret
    };

    let secret = decode_secret(&raw, args.input)?;

    let shares = match args.seed {
        Some(seed_hex) => {
            let seed: [u8; 32] = hex::decode(seed_hex.trim())
                .context("Failed to decode hex seed")?
                .try_into()
                .map_err(|seed: Vec<u8>| {
                    anyhow::anyhow!("Seed must be 32 bytes, got {}", seed.len())
                })?;
            secret_shares::split_with_rng(
                &secret,
                args.shares,
                args.threshold,
                &mut SeededRng::from_seed(seed),
            )
        }
        None => secret_shares::split(&secret, args.shares, args.threshold),
    }
    .context("Split failed")?;

    for share in shares {
        println!("{}", encode_share(&share, args.output));
    }

    Ok(())
}

fn handle_combine(args: CombineArgs) -> Result<()> {
    let mut shares = Vec::with_capacity(args.shares.len());
    for (i, share_str) in args.shares.iter().enumerate() {
        let share = decode_share(share_str, args.input)
            .with_context(|| format!("Failed to decode share {}", i + 1))?;
        shares.push(share);
    }

    let secret = secret_shares::combine(&shares).context("Combine failed")?;

    println!("{}", encode_secret(secret, args.output)?);

    Ok(())
}

// Drops the single line terminator left by `echo` or a heredoc. Secrets given as an
// argument are taken verbatim.
fn read_secret<R: std::io::Read>(reader: R) -> Result<String> {
    let mut raw = std::io::read_to_string(reader).context("Failed to read secret from stdin")?;
    if raw.ends_with('\n') {
        raw.pop();
        if raw.ends_with('\r') {
            raw.pop();
        }
    }
    Ok(raw)
}

fn decode_secret(raw: &str, encoding: SecretEncoding) -> Result<Vec<u8>> {
    match encoding {
        SecretEncoding::Text => Ok(raw.as_bytes().to_vec()),
        SecretEncoding::Hex => hex::decode(raw.trim()).context("Failed to decode hex secret"),
        SecretEncoding::Base64 => BASE64_STANDARD
            .decode(raw.trim())
            .context("Failed to decode Base64 secret"),
    }
}

fn encode_secret(secret: Vec<u8>, encoding: SecretEncoding) -> Result<String> {
    match encoding {
        SecretEncoding::Text => {
            String::from_utf8(secret).context("Recovered secret is not valid UTF-8, try --output hex")
        }
        SecretEncoding::Hex => Ok(hex::encode(secret)),
        SecretEncoding::Base64 => Ok(BASE64_STANDARD.encode(secret)),
    }
}

fn decode_share(raw: &str, encoding: ShareEncoding) -> Result<Vec<u8>> {
    let share = match encoding {
        ShareEncoding::Hex => hex::decode(raw.trim())?,
        ShareEncoding::Base64 => BASE64_STANDARD.decode(raw.trim())?,
    };

    if share.is_empty() {
        bail!("Share is empty");
    }

    Ok(share)
}

fn encode_share(share: &[u8], encoding: ShareEncoding) -> String {
    match encoding {
        ShareEncoding::Hex => hex::encode(share),
        ShareEncoding::Base64 => BASE64_STANDARD.encode(share),
    }
}

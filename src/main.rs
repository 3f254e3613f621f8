// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `goldilocks`: command-line front end for the table generators.
//!
//! # Usage
//!
//! ```text
//! goldilocks codes 6 2                      # C tables for m=6, t=2
//! goldilocks codes 6 3 --static --index     # header-style tables with k index
//! goldilocks codes 16 2 --format json       # one JSON object per table
//! goldilocks failure-combs 10 3             # failure patterns for a decoder test
//! goldilocks -c goldilocks.toml codes 8 3   # settings from a config file
//! ```
//!
//! Tables go to stdout and logs to stderr. Output is written only once the
//! whole family has been generated, so a failed search prints nothing.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use goldilocks_codes::config::{GeneratorConfig, OutputFormat};
use goldilocks_codes::emit::{write_family, CDeclarations, Declaration, JsonLines, TableWriter};
use goldilocks_codes::failure::FailureCombinations;
use goldilocks_codes::{generate_family, CodeParams};

// -----------------------------------------------------------------------
// CLI definition
// -----------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "goldilocks",
    version,
    about = "Generate Goldilocks flat-XOR erasure code tables"
)]
struct Cli {
    /// Path to TOML config file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter; RUST_LOG takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the code family for m parities and equation arity t.
    Codes {
        /// Number of parities (m).
        parities: usize,

        /// Parities per data element (t), 2 or 3.
        arity: usize,

        /// Output format.
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Declare arrays as `static unsigned int`.
        #[arg(long = "static")]
        static_decl: bool,

        /// Append pointer tables indexed by k.
        #[arg(long)]
        index: bool,

        /// Give up after this many search steps (0 for no limit).
        #[arg(long, env = "GOLDILOCKS_MAX_STEPS")]
        max_steps: Option<u64>,

        /// Do not stop early when the search starts repeating itself.
        #[arg(long)]
        no_oscillation_check: bool,
    },

    /// Emit the table of fragment-loss patterns.
    FailureCombs {
        /// Number of fragments (n).
        fragments: usize,

        /// Largest number of simultaneous failures, 1 to 4.
        depth: usize,
    },
}

// -----------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = GeneratorConfig::load(cli.config.as_deref()).context("failed to load config")?;

    // CLI args override config file values.
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    setup_tracing(&config.log.level);

    let output = match cli.command {
        Commands::Codes {
            parities,
            arity,
            format,
            static_decl,
            index,
            max_steps,
            no_oscillation_check,
        } => {
            if let Some(format) = format {
                config.output.format = format;
            }
            if static_decl {
                config.output.declaration = Declaration::Static;
            }
            if index {
                config.output.index = true;
            }
            if let Some(steps) = max_steps {
                config.search.max_steps = steps;
            }
            if no_oscillation_check {
                config.search.detect_oscillation = false;
            }
            cmd_codes(parities, arity, &config)?
        }
        Commands::FailureCombs { fragments, depth } => cmd_failure_combs(fragments, depth)?,
    };

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(&output).context("failed to write output")?;
    lock.flush().context("failed to write output")?;
    Ok(())
}

fn setup_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// -----------------------------------------------------------------------
// goldilocks codes
// -----------------------------------------------------------------------

fn cmd_codes(parities: usize, arity: usize, config: &GeneratorConfig) -> Result<Vec<u8>> {
    let params = CodeParams::new(parities, arity).context("invalid code parameters")?;
    info!(%params, limits = ?config.limits(), "generating code family");

    let family = generate_family(params, config.limits())
        .with_context(|| format!("no code family for {params}"))?;
    info!(
        first_k = family.first_k(),
        last_k = family.last_k(),
        tables = family.len(),
        "code family ready"
    );

    let mut writer: Box<dyn TableWriter> = match config.output.format {
        OutputFormat::C => Box::new(CDeclarations::new(
            config.output.declaration,
            config.output.index,
        )),
        OutputFormat::Json => Box::new(JsonLines),
    };
    let mut buf = Vec::new();
    write_family(writer.as_mut(), &family, &mut buf)?;
    Ok(buf)
}

// -----------------------------------------------------------------------
// goldilocks failure-combs
// -----------------------------------------------------------------------

fn cmd_failure_combs(fragments: usize, depth: usize) -> Result<Vec<u8>> {
    let combs = FailureCombinations::generate(fragments, depth)
        .context("invalid failure table parameters")?;
    info!(fragments, depth, rows = combs.len(), "generated failure patterns");

    let mut buf = Vec::new();
    combs.write_c(&mut buf)?;
    Ok(buf)
}

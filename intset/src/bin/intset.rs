//! intset CLI - build, query and combine sets of non-negative integers
//!
//! Sets are given either in the canonical `{1 2 3}` form or as a list such
//! as `1,2,3`. Results go to stdout; logs go to stderr and are controlled
//! with `RUST_LOG`.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use intset::{parse_operand, EvalConfig, IntSet, OutputFormat, Report, SetOp};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Build, query and combine bit-vector sets of non-negative integers")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// Pre-size sets to hold values below this bound
    #[arg(long, default_value_t = 0, global = true)]
    capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a set from integers and print it
    Render {
        /// Values to insert (negative values are rejected)
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Check whether a value is a member of a set
    Has {
        /// Set, e.g. "{1 2 3}" or 1,2,3
        set: String,

        /// Value to look up
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },
    /// Print the number of members of a set
    Len {
        /// Set, e.g. "{1 2 3}" or 1,2,3
        set: String,
    },
    /// Apply a set operation to two sets
    Eval {
        /// Operation to apply
        #[arg(value_enum)]
        op: SetOp,

        /// Left operand
        lhs: String,

        /// Right operand
        rhs: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = EvalConfig::default()
        .with_initial_capacity(cli.capacity)
        .with_format(cli.format);

    match &cli.command {
        Commands::Render { values } => handle_render(values, &config),
        Commands::Has { set, value } => handle_has(set, *value, &config),
        Commands::Len { set } => handle_len(set, &config),
        Commands::Eval { op, lhs, rhs } => handle_eval(*op, lhs, rhs, &config),
    }
}

fn handle_render(values: &[i64], config: &EvalConfig) -> Result<()> {
    let mut set = IntSet::try_with_capacity(config.initial_capacity)
        .map_err(|err| anyhow!("invalid capacity {}: {err}", config.initial_capacity))?;
    for &value in values {
        set.try_add(value).map_err(|err| {
            warn!(value, %err, "rejected input value");
            anyhow!("cannot add {value}: {err}")
        })?;
    }

    info!(members = set.len(), words = set.word_count(), "built set");
    match config.format {
        OutputFormat::Text => println!("{set}"),
        OutputFormat::Json => {
            let members: Vec<usize> = set.iter().collect();
            println!("{}", json!({ "members": members, "len": set.len() }));
        }
    }
    Ok(())
}

fn handle_has(set: &str, value: i64, config: &EvalConfig) -> Result<()> {
    let set = parse_operand(set, config).context("failed to parse set")?;
    let member = set.try_has(value).map_err(|err| {
        warn!(value, %err, "rejected input value");
        anyhow!("cannot look up {value}: {err}")
    })?;

    match config.format {
        OutputFormat::Text => println!("{member}"),
        OutputFormat::Json => println!("{}", json!({ "value": value, "member": member })),
    }
    Ok(())
}

fn handle_len(set: &str, config: &EvalConfig) -> Result<()> {
    let set = parse_operand(set, config).context("failed to parse set")?;

    match config.format {
        OutputFormat::Text => println!("{}", set.len()),
        OutputFormat::Json => println!("{}", json!({ "len": set.len() })),
    }
    Ok(())
}

fn handle_eval(op: SetOp, lhs: &str, rhs: &str, config: &EvalConfig) -> Result<()> {
    let lhs = parse_operand(lhs, config).context("failed to parse left operand")?;
    let rhs = parse_operand(rhs, config).context("failed to parse right operand")?;

    let report = Report::new(op, &lhs, &rhs);
    println!("{}", report.render(config.format)?);
    Ok(())
}

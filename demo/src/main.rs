mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use objency::objency;
use objency_json::JToken;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use config::{DemoConfig, Overrides, ValueKind};

#[derive(Parser, Debug)]
#[command(
    name = "objency-demo",
    about = "Filters a JSON object by value kind, prints it, then prints every value"
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file holding the object to wrap (defaults to the built-in sample).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Kind of value kept by the filter step.
    #[arg(long, value_enum, value_name = "KIND")]
    keep: Option<ValueKind>,

    /// Log filter directive, e.g. `debug` or `objency=trace`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            keep: self.keep,
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DemoConfig::load(cli.config.as_deref(), &cli.overrides())?;
    init_tracing(&config.log_level);
    debug!(?config, "configuration loaded");

    let mut token = config.read_input()?;
    for line in run(&mut token, config.keep)? {
        println!("{line}");
    }
    Ok(())
}

fn init_tracing(directive: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let _ = fmt().with_env_filter(env_filter).try_init();
}

/// Narrows to values of `keep`, visits them, restores every key and visits again.
fn run(token: &mut JToken, keep: ValueKind) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut wrapped = objency(token).context("input is not a plain JSON object")?;

    wrapped
        .filter(|value, _, _| keep.matches(value))
        .for_each(|value, index, _| lines.push(format!("filtered [{index}] {value}")));
    info!(
        kept = wrapped.len(),
        total = wrapped.all_keys().len(),
        keys = ?wrapped.active_keys(),
        "filter pass done"
    );

    wrapped
        .set_all_key()
        .for_each(|value, index, _| lines.push(format!("all [{index}] {value}")));
    Ok(lines)
}

//! Emits one record through a freshly configured facade. Handy from shell
//! scripts that want the same console/JSON/file layout as the Rust services.
//!
//! Usage:
//!   moelog [OPTIONS] <SEVERITY> <MESSAGE>
//!   moelog --json --field service=svc_name --attr svc_name=checkout info "order accepted"
//!   moelog --file --log-dir /var/log/app --max-bytes 10M error "disk full"

use clap::Parser;
use moelog::{LoggerConfig, MoeLogger, registry};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "moelog", version, about = "Emit a log record")]
struct Cli {
    /// TOML config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render console output as JSON
    #[arg(long)]
    json: bool,

    /// Minimum level (DEBUG, INFO, WARN, WARNING, ERROR, CRITICAL, FATAL)
    #[arg(long)]
    level: Option<String>,

    /// Also append to the dated log file
    #[arg(long)]
    file: bool,

    #[arg(long)]
    log_dir: Option<String>,

    /// Rollover threshold, e.g. 3M or 512K
    #[arg(long, value_parser = parse_bytes)]
    max_bytes: Option<u64>,

    /// Extra JSON field as NAME=SOURCE_ATTRIBUTE
    #[arg(long = "field", value_parser = parse_pair)]
    fields: Vec<(String, String)>,

    /// Record attribute as NAME=VALUE
    #[arg(long = "attr", value_parser = parse_pair)]
    attrs: Vec<(String, String)>,

    #[arg(long)]
    no_color: bool,

    /// Logger name shown in the record
    #[arg(long, default_value = "root")]
    logger: String,

    severity: String,

    message: String,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))
}

fn parse_bytes(s: &str) -> Result<u64, String> {
    moelog::output::size::parse_size(s).ok_or_else(|| format!("invalid size: '{s}'"))
}

fn build_config(cli: &Cli) -> Result<LoggerConfig, moelog::Error> {
    let mut config = match &cli.config {
        Some(path) => LoggerConfig::load_from(path)?,
        None => LoggerConfig::default(),
    };

    config.structured_output |= cli.json;
    config.write_to_file |= cli.file;
    if cli.no_color {
        config.colors = false;
    }
    if let Some(level) = &cli.level {
        config.minimum_level.clone_from(level);
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir.clone_from(dir);
    }
    if let Some(bytes) = cli.max_bytes {
        config.max_file_bytes = bytes;
    }
    config.extra_fields.extend(
        cli.fields
            .iter()
            .map(|(name, source)| moelog::ExtraField::new(name, source)),
    );
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let moe = match MoeLogger::new(config) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error setting up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(level) = registry().resolve(&cli.severity) else {
        eprintln!("Unknown severity: {}", cli.severity);
        return ExitCode::FAILURE;
    };

    let logger = moe.logger(&cli.logger);
    let mut event = logger.event(level).callsite(moelog::callsite!());
    for (name, value) in &cli.attrs {
        event = event.attr(name, value);
    }
    event.emit(cli.message.as_str());

    match moe.shutdown() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error flushing logs: {e}");
            ExitCode::FAILURE
        }
    }
}

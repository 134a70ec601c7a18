//! greek-key - draw Greek key (meander) borders as SVG and PNG
//!
//! Usage:
//!   greek-key [options] rect [--size n] [--width n] [--height n]
//!   greek-key [options] circle [--pattern-count n] [--radius n]
//!   greek-key patterns                List available pattern types
//!   greek-key help                    Show usage

use std::env;
use std::path::Path;
use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use greek_key::PatternKind;

mod cli;

use cli::args::{CliArgs, print_usage};
use cli::settings::{Settings, SettingsFile};

/// Log to stderr so `--json` output on stdout stays clean. `RUST_LOG`
/// overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 {
        match args[1].as_str() {
            "patterns" => {
                cmd_patterns();
                return;
            }
            "help" => {
                print_usage();
                return;
            }
            _ => {}
        }
    }

    if let Err(e) = cmd_generate(&args[1..]) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn cmd_patterns() {
    println!("Available patterns:");
    for kind in PatternKind::all() {
        println!("  {:<8} {}", kind.name(), kind.description());
    }
}

fn cmd_generate(args: &[String]) -> Result<()> {
    let parsed = CliArgs::parse(args)?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let file = match &parsed.config_path {
        Some(path) => SettingsFile::load(Path::new(path))?,
        None => SettingsFile::default(),
    };

    let Some(settings) = Settings::resolve(&parsed, &file)? else {
        print_usage();
        return Ok(());
    };

    tracing::info!(pattern = settings.pattern.name(), file = %settings.file, "generating border");
    cli::render::run(&settings)
}

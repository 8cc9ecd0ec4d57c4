//! Redkey CLI - derive an Ed25519 keypair from a password and salt

use anyhow::Context;
use clap::{CommandFactory, Parser};
use redkey_cli::{normalize_args, print_keys, print_keys_json, write_key_files, Cli};
use redkey_core::KeygenConfig;
use redkey_crypto::pipeline;
use std::io::{self, Write};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.verbose);

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_usage() {
                eprintln!();
                eprintln!("{}", Cli::command().render_help());
            }
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &KeygenConfig) -> anyhow::Result<()> {
    let keypair = pipeline::run(config).context("key derivation failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        print_keys_json(&mut out, &keypair)?;
    } else {
        print_keys(&mut out, &keypair)?;
    }
    out.flush()?;

    if config.output.writes_files() {
        let written = write_key_files(&config.output, &keypair)?;
        debug!(count = written.len(), "Key files written");
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

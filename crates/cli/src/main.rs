// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use specsplit::cli::Cli;
use specsplit::config;
use specsplit::discovery;
use specsplit::error::{Error, ExitCode};
use specsplit::pipeline;

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<String, Error> {
    let mut shard = cli.to_config();
    // Bounds are checked before anything touches the filesystem.
    shard.validate()?;

    let config_path = cli.config.clone().or_else(|| discovery::find_config(&cli.test_dir));
    if let Some(path) = config_path {
        tracing::debug!("using config {}", path.display());
        let file = config::load(&path)?;
        shard.apply_file(&file, cli.mode.is_some(), !cli.patterns.is_empty());
    }

    let mut out = Vec::new();
    pipeline::run(&shard, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn main() -> anyhow::Result<std::process::ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_str());

    match run(&cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(ExitCode::Success.into())
        }
        Err(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(&err).into())
        }
    }
}

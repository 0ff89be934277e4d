// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use stepmap::IntervalMap;

mod cli;
use cli::display;
use cli::script::Script;
use cli::{Cli, Commands, OutputArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Demo { output } => run_demo(output),
        Commands::Replay {
            script,
            verify,
            output,
        } => run_replay(&script, verify, output),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `-v` selects debug and `-vv` trace.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(fallback))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_demo(output: OutputArgs) -> Result<()> {
    let script = Script::walkthrough();

    let map = script.apply_with(true, |_, op, map| {
        if !output.plain {
            display::print_map(&op.to_string(), map);
        }
    })?;

    print_result(&map, output);
    Ok(())
}

fn run_replay(path: &str, verify: bool, output: OutputArgs) -> Result<()> {
    let script = Script::load(path)?;
    tracing::info!(path, ops = script.ops.len(), "replaying script");

    let map = script.apply(verify)?;
    if !output.plain {
        display::print_map("result", &map);
    }

    print_result(&map, output);
    Ok(())
}

/// Final lookups, then (in plain mode) `all entries:` and every boundary as `(key,value)`.
fn print_result(map: &IntervalMap<i64, String>, output: OutputArgs) {
    if output.from > output.to {
        tracing::warn!(from = output.from, to = output.to, "empty lookup range");
    }

    if output.plain {
        for line in display::plain_report(map, output.from, output.to) {
            println!("{}", line);
        }
    } else {
        display::print_lookups(map, output.from, output.to);
    }
}

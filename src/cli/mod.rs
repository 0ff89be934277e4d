// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the stepmap command-line interface.
//!
//! Two subcommands: `demo` walks through the reference assignment sequence,
//! and `replay` applies a JSON script of assignments. Both print the
//! resulting boundaries, runs and lookups, boxed and colored, or in the plain
//! `key->value` form with `--plain`.

pub mod display;
pub mod script;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stepmap",
    about = "Canonical interval maps: assign ranges, inspect boundaries",
    version
)]
pub struct Cli {
    /// Log assignments as they are applied (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the reference walkthrough (default 'A', six assignments)
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Apply a JSON script of assignments and print the result
    ///
    /// Script format:
    /// {"default": "A", "ops": [{"begin": 2, "end": 5, "value": "C"}]}
    Replay {
        /// Path to the script, or `-` for stdin
        script: String,

        /// Re-check canonical form after every assignment
        #[arg(long)]
        verify: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// First key of the lookup row
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub from: i64,

    /// Last key of the lookup row (inclusive)
    #[arg(long, default_value = "10", allow_negative_numbers = true)]
    pub to: i64,

    /// Print `key->value` lines and raw boundaries without boxes or colors
    #[arg(long)]
    pub plain: bool,
}

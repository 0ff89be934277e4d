//! Custom cargo commands for the stepmap crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz [S]  - Fuzz assign sequences for S seconds (default 60)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Contracts that must stay wired into `src/verify/contracts.rs`.
const REQUIRED_CONTRACTS: &[&str] = &[
    "check_canonical",
    "check_canonical_near",
    "check_assign_postcondition",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let seconds = match args.next() {
                Some(raw) => raw
                    .parse::<u64>()
                    .with_context(|| format!("invalid fuzz duration {:?}", raw))?,
                None => 60,
            };
            fuzz(seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contracts + debug/release tests + clippy)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
  fuzz [S]  Run the assign_sequence fuzz target for S seconds (needs cargo-fuzz)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("stepmap Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract wiring...");
    check_contracts_wired()?;
    println!("✓ Contracts present and called from assign\n");

    // Debug builds run every contract after every assign.
    println!("[2/4] Running tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ Debug tests passed\n");

    // Release builds compile the contracts out; the properties must still hold.
    println!("[3/4] Running tests (release, contracts off)...");
    run_cargo(&["test", "--release", "--quiet"])?;
    println!("✓ Release tests passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run the fuzz target for a bounded time
fn fuzz(seconds: u64) -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", seconds);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", "assign_sequence", "--", &max_time])
        .current_dir(&fuzz_dir)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzzing assign_sequence failed");
    }

    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("no current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every required contract must be defined and called from `map.rs`.
fn check_contracts_wired() -> Result<()> {
    let root = project_root()?;

    let contracts = std::fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read src/verify/contracts.rs")?;
    let map = std::fs::read_to_string(root.join("src/map.rs"))
        .context("Failed to read src/map.rs")?;

    for name in REQUIRED_CONTRACTS {
        if !contracts.contains(&format!("pub fn {}", name)) {
            bail!("contract {} is missing from src/verify/contracts.rs", name);
        }
        if !map.contains(&format!("contracts::{}(", name)) {
            bail!(
                "contract {} is no longer called from src/map.rs. Someone may have removed a safety check!",
                name
            );
        }
    }

    Ok(())
}

//! Custom cargo commands for rangeseek.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask check     - Quick check (no Kani)
//!   cargo xtask bench     - Run criterion benchmarks
//!   cargo xtask report    - Produce the timing table in data/

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Functions mirrored in kani-proofs/src/lib.rs, with the file defining each.
const MIRRORED: &[(&str, &str)] = &[
    ("lower_bound", "src/search/bounds.rs"),
    ("upper_bound", "src/search/bounds.rs"),
    ("search_binary", "src/search/binary.rs"),
    ("search_ternary", "src/search/ternary.rs"),
    ("search_exponential", "src/search/exponential.rs"),
];

const COPYRIGHT: &str = "// Copyright 2025-present The rangeseek Authors";
const SPDX: &str = "// SPDX-License-Identifier: Apache-2.0";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("report") => report()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests + clippy + Kani + mirror check)
  test      Run all Rust tests
  kani      Run Kani proofs only
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run criterion benchmarks
  report    Run the timing harness and write data/timings.txt
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("rangeseek Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking Kani mirrors and license headers...");
    verify_mirrors()?;
    verify_headers()?;
    println!("✓ Mirrored loops present, headers in place\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs hold\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run the model-checking proofs
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    if !proofs_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "search_bench"])
}

/// Run the timing harness with its defaults
fn report() -> Result<()> {
    run_cargo(&[
        "run",
        "--release",
        "--bin",
        "rangeseek",
        "--",
        "bench",
        "--output",
        "data/timings.txt",
    ])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
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

/// Every loop the proofs cover must still exist in the main crate.
fn verify_mirrors() -> Result<()> {
    let root = project_root()?;

    let proofs = read(&root, "kani-proofs/src/lib.rs")?;
    for (name, source) in MIRRORED {
        let signature = format!("pub fn {}", name);
        if !proofs.contains(&signature) {
            bail!("kani-proofs is missing {}", name);
        }
        let defined = read(&root, source)?;
        if !defined.contains(&signature) {
            bail!("{} no longer defines {}; update kani-proofs", source, name);
        }
    }

    Ok(())
}

/// Every source file outside `testing.rs` opens with the project header.
fn verify_headers() -> Result<()> {
    let root = project_root()?;
    let mut missing = Vec::new();

    for dir in ["src", "src/search", "src/bench", "src/cli", "kani-proofs/src", "fuzz/fuzz_targets"] {
        let entries = std::fs::read_dir(root.join(dir)).with_context(|| format!("Failed to list {}", dir))?;
        for entry in entries {
            let path = entry?.path();
            if path.extension() != Some(std::ffi::OsStr::new("rs")) || path.ends_with("testing.rs") {
                continue;
            }
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let mut lines = text.lines();
            if lines.next() != Some(COPYRIGHT) || lines.next() != Some(SPDX) {
                missing.push(path.display().to_string());
            }
        }
    }

    if !missing.is_empty() {
        bail!("Missing or foreign license header in:\n  {}", missing.join("\n  "));
    }
    Ok(())
}

fn read(root: &Path, rel: &str) -> Result<String> {
    std::fs::read_to_string(root.join(rel)).with_context(|| format!("Failed to read {}", rel))
}

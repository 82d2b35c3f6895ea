// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the rangeseek command-line interface.
//!
//! Three subcommands: `bench` runs the timing harness and writes a report,
//! `find` runs the searches over values given on the command line, and
//! `list` prints the algorithm catalogue. Every `bench` option can also come
//! from a `RANGESEEK_*` environment variable.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use rangeseek::bench::{
    BenchConfig, ReportFormat, DEFAULT_MAX_SIZE, DEFAULT_REPEATS, DEFAULT_SAMPLES, DEFAULT_WARMUP,
};
use rangeseek::Algorithm;

#[derive(Parser)]
#[command(
    name = "rangeseek",
    about = "Search algorithms over sorted sequences, with a timing harness",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time every algorithm over growing prefixes of 1..=N and write a report
    Bench(BenchArgs),

    /// Search for a value in a list given on the command line
    Find {
        /// Value to look for
        #[arg(allow_negative_numbers = true)]
        value: i64,

        /// Values to search, in order (ascending for every algorithm but linear)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Algorithms to run (default: all)
        #[arg(short, long, value_enum)]
        algorithm: Vec<Algorithm>,
    },

    /// List the available algorithms
    List,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Largest range size (the progression is 1..=N)
    #[arg(long, env = "RANGESEEK_MAX_SIZE", default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,

    /// Number of range sizes sampled from [0, N)
    #[arg(long, env = "RANGESEEK_SAMPLES", default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Timed calls per sample
    #[arg(long, env = "RANGESEEK_REPEATS", default_value_t = DEFAULT_REPEATS)]
    pub repeats: u32,

    /// Untimed calls before each sample
    #[arg(long, env = "RANGESEEK_WARMUP", default_value_t = DEFAULT_WARMUP)]
    pub warmup: u32,

    /// Value searched for (0 is absent from the progression: worst case)
    #[arg(long, env = "RANGESEEK_TARGET", default_value_t = 0, allow_negative_numbers = true)]
    pub target: i64,

    /// Algorithms to time (default: all)
    #[arg(short, long, value_enum)]
    pub algorithm: Vec<Algorithm>,

    /// Report path
    #[arg(short, long, env = "RANGESEEK_OUTPUT", default_value = "data/timings.txt")]
    pub output: PathBuf,

    /// Report format
    #[arg(long, value_enum, env = "RANGESEEK_FORMAT", default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl BenchArgs {
    pub fn to_config(&self) -> BenchConfig {
        let algorithms = if self.algorithm.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithm.clone()
        };
        BenchConfig {
            max_size: self.max_size,
            samples: self.samples,
            repeats: self.repeats,
            warmup: self.warmup,
            target: self.target,
            algorithms,
        }
    }
}

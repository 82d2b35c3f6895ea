// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Timing harness for comparing the search algorithms.
//!
//! Builds the progression `1..=max_size` once, then for every selected
//! algorithm and every sample size `k * (max_size / samples)` times the
//! search over the prefix of that size. Each measurement is the mean of
//! `repeats` calls after `warmup` untimed ones.
//!
//! The default target is `0`, which is absent from the progression, so every
//! algorithm runs its worst case (full scan, full narrowing).
//!
//! Wall-clock timing via `Instant` is noisy for sub-microsecond calls. For
//! statistically sound numbers use the criterion benches; this harness is for
//! producing the size/duration tables that get plotted.

pub mod report;

use std::hint::black_box;
use std::time::{Duration, Instant};

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::types::Algorithm;

pub use report::{render, write_report, ReportError, ReportFormat};

/// Largest progression timed by default.
pub const DEFAULT_MAX_SIZE: usize = 10_000_000;
/// Number of sample sizes taken from `[0, max_size)` by default.
pub const DEFAULT_SAMPLES: usize = 1_000;
/// Timed calls per sample by default.
pub const DEFAULT_REPEATS: u32 = 100;
/// Untimed calls before each sample by default.
pub const DEFAULT_WARMUP: u32 = 10;

/// Invalid harness configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    #[error("sample count must be positive")]
    NoSamples,
    #[error("repeat count must be positive")]
    NoRepeats,
    #[error("cannot take {samples} samples from a progression of {max_size} elements")]
    TooManySamples { samples: usize, max_size: usize },
    #[error("no algorithms selected")]
    NoAlgorithms,
}

/// What to time and how often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    pub max_size: usize,
    pub samples: usize,
    pub repeats: u32,
    pub warmup: u32,
    pub target: i64,
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            samples: DEFAULT_SAMPLES,
            repeats: DEFAULT_REPEATS,
            warmup: DEFAULT_WARMUP,
            target: 0,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.samples == 0 {
            return Err(BenchError::NoSamples);
        }
        if self.repeats == 0 {
            return Err(BenchError::NoRepeats);
        }
        if self.samples > self.max_size {
            return Err(BenchError::TooManySamples {
                samples: self.samples,
                max_size: self.max_size,
            });
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::NoAlgorithms);
        }
        Ok(())
    }

    /// Distance between consecutive sample sizes.
    pub fn step(&self) -> usize {
        self.max_size / self.samples.max(1)
    }

    /// Sample sizes, ascending, starting at the empty range.
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        let step = self.step();
        (0..self.samples).map(move |k| k * step)
    }
}

/// Mean duration per algorithm for one range size, in microseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRow {
    pub size: usize,
    pub micros: Vec<f64>,
}

/// Harness output: one row per size, one column per algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchTable {
    pub config: BenchConfig,
    pub algorithms: Vec<Algorithm>,
    pub rows: Vec<BenchRow>,
}

impl BenchTable {
    /// Column of timings for one algorithm, in row order.
    pub fn column(&self, algorithm: Algorithm) -> Option<Vec<f64>> {
        let col = self.algorithms.iter().position(|a| *a == algorithm)?;
        Some(self.rows.iter().map(|row| row.micros[col]).collect())
    }

    /// Mean of a column, for summaries.
    pub fn mean(&self, algorithm: Algorithm) -> Option<f64> {
        let column = self.column(algorithm)?;
        if column.is_empty() {
            return None;
        }
        Some(column.iter().sum::<f64>() / column.len() as f64)
    }
}

/// The benchmark input: `[1, 2, ..., n]`.
pub fn progression(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// Mean duration of one call, after `warmup` untimed calls.
pub fn time_call(
    algorithm: Algorithm,
    seq: &[i64],
    target: i64,
    warmup: u32,
    repeats: u32,
) -> Duration {
    for _ in 0..warmup {
        black_box(algorithm.search(black_box(seq), black_box(target)));
    }

    let start = Instant::now();
    for _ in 0..repeats {
        black_box(algorithm.search(black_box(seq), black_box(target)));
    }
    start.elapsed() / repeats.max(1)
}

/// Create a progress style for the per-algorithm progress bars
#[cfg(feature = "progress")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Run the harness.
pub fn run_bench(config: &BenchConfig) -> Result<BenchTable, BenchError> {
    config.validate()?;

    info!(
        max_size = config.max_size,
        samples = config.samples,
        repeats = config.repeats,
        target = config.target,
        "starting timing run"
    );

    let data = progression(config.max_size);
    let mut rows: Vec<BenchRow> = config
        .sizes()
        .map(|size| BenchRow {
            size,
            micros: Vec::with_capacity(config.algorithms.len()),
        })
        .collect();

    for &algorithm in &config.algorithms {
        #[cfg(feature = "progress")]
        let pb = ProgressBar::new(rows.len() as u64);
        #[cfg(feature = "progress")]
        pb.set_style(create_progress_style());
        #[cfg(feature = "progress")]
        pb.set_prefix(algorithm.name());

        let started = Instant::now();
        for row in &mut rows {
            let mean = time_call(
                algorithm,
                &data[..row.size],
                config.target,
                config.warmup,
                config.repeats,
            );
            row.micros.push(mean.as_secs_f64() * 1e6);

            #[cfg(feature = "progress")]
            pb.inc(1);
        }

        #[cfg(feature = "progress")]
        pb.finish_and_clear();

        info!(
            algorithm = algorithm.name(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "timed"
        );
    }

    debug!(rows = rows.len(), "timing run complete");

    Ok(BenchTable {
        config: config.clone(),
        algorithms: config.algorithms.clone(),
        rows,
    })
}

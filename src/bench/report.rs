// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

//! Report writers for [`BenchTable`].
//!
//! Two formats:
//!
//! - **text**: fixed-width columns ready for gnuplot. A `#` title line, a
//!   `#`-prefixed header (`Size` plus one column per algorithm), then one
//!   row per size. Durations are microseconds with two decimals.
//! - **json**: the whole table including the configuration that produced it.
//!
//! ```text
//! # Search timings: target 0, mean of 100 calls, microseconds per call
//! #Size          LSearch        BSearch
//! 0              0.01           0.01
//! 10000          4.87           0.03
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::BenchTable;

/// Width of every column in the text report.
pub const COLUMN_WIDTH: usize = 15;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render the fixed-width text report.
pub fn render_text(table: &BenchTable) -> String {
    let mut out = format!(
        "# Search timings: target {}, mean of {} calls, microseconds per call\n",
        table.config.target, table.config.repeats
    );

    out.push_str(&format!("#{:<width$}", "Size", width = COLUMN_WIDTH - 1));
    for algorithm in &table.algorithms {
        out.push_str(&format!("{:<width$}", algorithm.name(), width = COLUMN_WIDTH));
    }
    out.push('\n');

    for row in &table.rows {
        out.push_str(&format!("{:<width$}", row.size, width = COLUMN_WIDTH));
        for micros in &row.micros {
            out.push_str(&format!("{:<width$.2}", micros, width = COLUMN_WIDTH));
        }
        out.push('\n');
    }

    out
}

/// Render the JSON report.
pub fn render_json(table: &BenchTable) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(table)?)
}

pub fn render(table: &BenchTable, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(render_text(table)),
        ReportFormat::Json => render_json(table),
    }
}

/// Write the report to `path`, creating missing parent directories.
pub fn write_report(table: &BenchTable, path: &Path, format: ReportFormat) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let body = render(table, format)?;
    fs::write(path, body).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = table.rows.len(), "report written");
    Ok(())
}

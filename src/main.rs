// Copyright 2025-present The rangeseek Authors
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rangeseek::bench::{run_bench, write_report};
use rangeseek::Algorithm;

mod cli;
use cli::display::{self, pad_right, position, row, section_bot, section_top, timing_us};
use cli::{BenchArgs, Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Bench(args) => run_bench_command(&args),
        Commands::Find {
            value,
            values,
            algorithm,
        } => {
            run_find(value, &values, &algorithm);
            Ok(())
        }
        Commands::List => {
            print_catalogue();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so reports and tables on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_bench_command(args: &BenchArgs) -> Result<()> {
    let config = args.to_config();
    let table = run_bench(&config).context("invalid benchmark configuration")?;

    write_report(&table, &args.output, args.format)
        .with_context(|| format!("could not save timings to {}", args.output.display()))?;

    section_top("Mean time per call (µs)");
    for &algorithm in &table.algorithms {
        let mean = table.mean(algorithm).unwrap_or(0.0);
        row(&format!(" {} {}", pad_right(algorithm.name(), 14), timing_us(mean)));
    }
    section_bot();
    println!("Report: {}", args.output.display());
    Ok(())
}

fn run_find(value: i64, values: &[i64], selected: &[Algorithm]) {
    let algorithms: &[Algorithm] = if selected.is_empty() {
        &Algorithm::ALL
    } else {
        selected
    };

    let sorted = values.windows(2).all(|w| w[0] <= w[1]);
    if !sorted {
        warn!("input is not in ascending order; only linear search gives a defined answer");
    }
    info!(value, len = values.len(), "searching");

    section_top(&format!("Searching for {}", value));
    for &algorithm in algorithms {
        let pos = algorithm.search(values, value);
        let answer = if algorithm.is_bound() {
            display::insertion_point(pos)
        } else {
            position(pos, values.len())
        };
        let mut line = format!(" {} {}", pad_right(algorithm.name(), 14), answer);
        if algorithm.requires_sorted() && !sorted {
            line.push_str("  ");
            line.push_str(&display::unsorted_marker());
        }
        row(&line);
    }
    section_bot();
}

fn print_catalogue() {
    section_top("Algorithms");
    for algorithm in Algorithm::ALL {
        let id = algorithm
            .to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default();
        let sorted = if algorithm.requires_sorted() { "sorted" } else { "any order" };
        row(&format!(
            " {} {} {} {}",
            pad_right(algorithm.name(), 12),
            pad_right(&id, 17),
            pad_right(sorted, 10),
            algorithm.complexity()
        ));
    }
    section_bot();
}

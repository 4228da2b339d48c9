//! Cleaning pipeline performance benchmarks.
//!
//! Measures end-to-end cleaning performance including parsing, ingestion,
//! normalization, and filtering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hardwood::stats::{correlate, summarize};
use hardwood::{Cleaner, DatasetKind};
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate a realistic active-players roster CSV.
fn generate_roster_data(rows: usize) -> String {
    let mut data = String::new();
    data.push_str("id,first_name,last_name,position,height,weight,jersey_number,college,country,draft_year,draft_round,draft_number,team.full_name\n");

    let positions = ["G", "F", "C", "G-F", "F-C"];
    let colleges = ["kentucky", "duke", "kansas", "none", ""];
    let teams = ["denver nuggets", "boston celtics", "oklahoma city thunder"];

    for row in 0..rows {
        // Heights cluster around 6-0 to 6-11 with periodic entry errors and
        // missing weights, so every pipeline step has work to do.
        let height = if row % 97 == 0 {
            "9-9".to_string()
        } else {
            format!("6-{}", row % 12)
        };
        let weight = if row % 31 == 0 {
            String::new()
        } else {
            (175 + (row % 80)).to_string()
        };

        data.push_str(&format!(
            "{},first{},last{},{},{},{},{},{},usa,{},{},{},{}\n",
            row + 1,
            row,
            row,
            positions[row % positions.len()],
            height,
            weight,
            (row % 99) + 1,
            colleges[row % colleges.len()],
            2005 + (row % 18),
            (row % 2) + 1,
            (row % 60) + 1,
            teams[row % teams.len()],
        ));
    }

    data
}

/// Benchmark the full clean-file pipeline at several roster sizes.
fn bench_clean_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("clean_pipeline");

    for rows in [50, 200, 500, 2000].iter() {
        let data = generate_roster_data(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("roster_rows", rows), &data, |b, data| {
            b.iter_with_setup(
                || {
                    let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
                    temp.write_all(data.as_bytes()).unwrap();
                    temp
                },
                |temp| {
                    let cleaner = Cleaner::new();
                    let outcome = cleaner
                        .clean_file(temp.path(), DatasetKind::ActivePlayers)
                        .unwrap();
                    black_box(outcome);
                },
            );
        });
    }

    group.finish();
}

/// Benchmark statistics over an already-cleaned dataset.
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for rows in [200, 2000].iter() {
        let data = generate_roster_data(*rows);
        let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
        temp.write_all(data.as_bytes()).unwrap();
        let outcome = Cleaner::new()
            .clean_file(temp.path(), DatasetKind::ActivePlayers)
            .unwrap();

        group.bench_with_input(
            BenchmarkId::new("summarize", rows),
            &outcome.dataset,
            |b, dataset| {
                b.iter(|| black_box(summarize(dataset, &["height", "weight"]).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("correlate", rows),
            &outcome.dataset,
            |b, dataset| {
                b.iter(|| black_box(correlate(dataset, &["height", "weight"]).unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_clean_pipeline, bench_stats);
criterion_main!(benches);

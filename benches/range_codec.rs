use chrono::TimeDelta;
use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vidshelf::cli::Args;
use vidshelf_domain::VideoFilters;
use vidshelf_domain::range::{DurationRange, duration, size};

fn benchmark_range_text(c: &mut Criterion) {
    let range = DurationRange::bounded(TimeDelta::minutes(5), TimeDelta::seconds(5430));
    c.bench_function("duration_encode", |b| b.iter(|| duration::encode(black_box(&range))));
    c.bench_function("duration_decode", |b| b.iter(|| duration::decode(black_box("5-90.5"))));
    c.bench_function("size_decode", |b| b.iter(|| size::decode(black_box("128-4096"))));
}

fn benchmark_query(c: &mut Criterion) {
    let query = "q=live%20set&sort=longest&site=vimeo&size=10-700&duration=5-";
    c.bench_function("query_round_trip", |b| {
        b.iter(|| {
            let filters = VideoFilters::from_query_string(black_box(query));
            filters.to_query_string()
        })
    });
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_decode", |b| {
        b.iter(|| {
            let argv = black_box(["vidshelf", "decode", "--kind", "size", "5-"]);
            let args = Args::try_parse_from(argv).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_range_text, benchmark_query, benchmark_cli_parsing);
criterion_main!(benches);

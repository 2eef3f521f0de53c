use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mimeparse::{best_match, parse_media_ranges};

const HEADER_VALUES: [&str; 3] = [
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
    "application/json, text/javascript, */*;q=0.01",
    "text/*;q=0.3, text/html;q=0.7, text/html;level=1, text/html;level=2;q=0.4, */*;q=0.5",
];

fn bench_best_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_match");
    group.sample_size(500);
    group.measurement_time(Duration::from_secs(10));
    let supported = ["application/json", "application/xml", "text/html"];
    for (i, header_value) in HEADER_VALUES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("best_match", i), header_value, |b, h| {
            b.iter(|| black_box(best_match(&supported, h)))
        });
    }
}

fn bench_parse_media_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_media_ranges");
    for (i, header_value) in HEADER_VALUES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("combinator", i), header_value, |b, h| {
            b.iter(|| black_box(parse_media_ranges(h)))
        });
    }
}

criterion_group!(benches, bench_best_match, bench_parse_media_ranges);
criterion_main!(benches);

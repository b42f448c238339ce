use std::hint::black_box;

use codspeed_criterion_compat::{
    BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use jast_benchmark::synthetic_source;

fn benchmark_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser Benchmark");

    for methods in [1, 10, 100] {
        let source = synthetic_source(methods);
        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(BenchmarkId::new("parse", methods), &source, |b, source| {
            b.iter(|| black_box(jast_parse::parse(source)));
        });
        group.bench_with_input(
            BenchmarkId::new("parse_unfinalized", methods),
            &source,
            |b, source| {
                b.iter(|| black_box(jast_parse::parse_with(source, ())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_parser);
criterion_main!(benches);

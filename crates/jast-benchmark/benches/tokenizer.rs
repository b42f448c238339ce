use codspeed_criterion_compat::{
    Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use jast_benchmark::synthetic_source;

static IDENTIFIERS: &str =
    "It was the year when they finally immanentized the Eschaton It was the year when they \
     finally immanentized the Eschaton It was the year when they finally immanentized the \
     Eschaton It was the year when they finally immanentized the Eschaton It was the year when \
     they finally immanentized the Eschaton It was the year when they finally immanentized the \
     Eschaton";

static OPERATORS: &str = "
a += b -= c == d != e <= f >= g && h || i :: j -> k ... l ; m , n . o @ p ? q : r
a += b -= c == d != e <= f >= g && h || i :: j -> k ... l ; m , n . o @ p ? q : r
a += b -= c == d != e <= f >= g && h || i :: j -> k ... l ; m , n . o @ p ? q : r
a += b -= c == d != e <= f >= g && h || i :: j -> k ... l ; m , n . o @ p ? q : r
";

fn iterate(s: &str) {
    use jast_tokenizer::{SyntaxKind, Tokenizer};

    let mut tokenizer = Tokenizer::new(s);

    loop {
        let token = tokenizer.next_token();
        if token.kind == SyntaxKind::EOF {
            break;
        }
        black_box(token);
    }
}

fn bench_iterate(c: &mut Criterion) {
    let java = synthetic_source(20);
    let candidates =
        [("identifiers", IDENTIFIERS), ("operators", OPERATORS), ("java", java.as_str())];

    let mut group = c.benchmark_group("iterate");
    for (name, source) in candidates {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(name, &source, |b, &s| b.iter(|| iterate(s)));
    }
    group.finish();
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);

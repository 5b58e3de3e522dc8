//! Lexer benchmarks.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use snip::lexer::lexer::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_lexer_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let x = 42; while (x > 0) { x = x - 1; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| token_count(black_box("let x = 42;")))
    });

    group.bench_function("while_loop", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        let count = 0;
        let limit = 100;

        // sum the even numbers below the limit
        while (count < limit) {
            if (count % 2 == 0) {
                total = total + count;
            } else {
                /* odd numbers are skipped */
                continue;
            }
            count = count + 1;
        }

        if (total >= 2450 and total != null) {
            return true;
        }

        return "done";
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("let s = \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = "let s = \"line one\\nline two\\t\\\"quoted\\\"\";";
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| token_count(black_box("let x = 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| token_count(black_box("let x = 3.14159;")))
    });

    group.bench_function("exponent", |b| {
        b.iter(|| token_count(black_box("let x = 6.022e23;")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers
);
criterion_main!(benches);

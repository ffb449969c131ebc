//! Lexer Benchmarks
//!
//! Measures throughput of the KDL tokenizer.
//! Run with: `cargo bench --package kdl-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kdl_lex::lex;

fn lexer_token_count(source: &str) -> usize {
    lex(source).len()
}

fn bench_lexer_nodes(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "node 1 2 key=\"value\" { child #true; other #null }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("single_node", |b| {
        b.iter(|| lexer_token_count(black_box("node 1;")))
    });

    group.bench_function("node_with_children", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_document");

    let source = r##"
        package {
            name my-pkg
            version "1.2.3"
            authors "Alice <alice@example.com>" "Bob"
            /- disabled #true
            dependencies platform=windows {
                winapi "1.0.0" path=#"C:\winapi"#
                serde "1.0" features=(list)"derive"
            }
            /* block /* nested */ comment */
            scripts {
                build #"""
                    cargo build --release
                    """#
            }
            limits max=0xFF_FF ratio=0.75 scale=1.5e-3 mode=0o644 mask=0b1010
        }
    "##;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("package_manifest", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let large = source.repeat(200);
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("large_document", |b| {
        b.iter(|| lexer_token_count(black_box(&large)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("s \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = "s \"tab\\there \\u{1F600} and a \\\"quote\\\" \\\n    continued\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("raw_string", |b| {
        let source = "s ##\"raw \"# text with \"quotes\"\"##;";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("x 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("x -3.14159e+10;")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("x 0xDEAD_BEEF;")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("ascii_ident", |b| {
        b.iter(|| lexer_token_count(black_box("very-long-node-name_with.dots;")))
    });

    group.bench_function("unicode_ident", |b| {
        b.iter(|| lexer_token_count(black_box("ノード名 αβγ 🦀;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| lexer_token_count(black_box("a b c d e f g h i j k l m n o p;")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_nodes,
    bench_lexer_document,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);

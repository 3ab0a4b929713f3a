#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: qparam vs url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;

use qparam::{Charset, ParsedQuery};

// Rust url crate
use url::form_urlencoded;

const SIMPLE: &str = "a=1&b=2&c=3";

const CALLBACK: &str = "TOKEN=EC%2d4XL82648PV7990539&ACK=Success&TIMESTAMP=2016%2d08%2d24T05%3a29%3a34Z&EMAIL=ua_test_1%40baozun%2ecn&SHIPTONAME=Allan%20Chen&AMT=11%2e75&L_NAME0=%e7%94%b7%e5%ad%90UA%20Boxerjock%e2%84%a2&NOTIFYURL=http%3a%2f%2flocalhost%3a8091%2fpayment%2fpaypalValidate%2ehtm";

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let utf8 = Some(Charset::utf_8());

    group.bench_function("qparam", |b| {
        b.iter(|| ParsedQuery::parse(black_box(SIMPLE), utf8));
    });

    group.bench_function("qparam_verbatim", |b| {
        b.iter(|| ParsedQuery::parse(black_box(SIMPLE), None));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(SIMPLE).as_bytes()).into_owned().collect::<Vec<_>>());
    });

    group.finish();
}

fn bench_parse_callback_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_callback");
    let utf8 = Some(Charset::utf_8());

    group.bench_function("qparam", |b| {
        b.iter(|| ParsedQuery::parse(black_box(CALLBACK), utf8).single_value_map());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(CALLBACK).as_bytes())
                .into_owned()
                .collect::<HashMap<_, _>>()
        });
    });

    group.finish();
}

fn bench_build_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let parsed = ParsedQuery::parse(CALLBACK, Some(Charset::utf_8()));
    let single = parsed.single_value_map();

    group.bench_function("qparam_safe", |b| {
        b.iter(|| black_box(&parsed).to_query_string(Some(Charset::utf_8())));
    });

    group.bench_function("qparam_natural_ordering", |b| {
        b.iter(|| qparam::build_natural_ordering(black_box(&single)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .extend_pairs(black_box(&single))
                .finish()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_callback_all,
    bench_build_all
);
criterion_main!(benches);

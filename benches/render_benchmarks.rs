#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::panic_in_result_fn)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use folio::test_utils::*;

// Benchmark content document parsing
fn bench_content_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("Content Parser");

    group.bench_function("parse_site", |b| {
        b.iter(|| {
            let mut parser = ContentParser::new(black_box(SITE_JSON)).unwrap();
            parser.parse().unwrap()
        });
    });

    group.finish();
}

// Benchmark template parsing
fn bench_template_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("Template Parser");

    group.bench_function("parse_index", |b| {
        b.iter(|| parse_template(black_box(TEMPLATE_HTML)).unwrap());
    });

    group.finish();
}

// Benchmark the full bind + serialize pass
fn bench_bind_and_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Binding");

    let doc = ContentDocument::from_json(SITE_JSON).unwrap();
    let page = parse_template(TEMPLATE_HTML).unwrap();

    group.bench_function("bind", |b| {
        b.iter(|| {
            let mut bound = page.clone();
            Binder::new(black_box(&doc)).bind(&mut bound);
            bound
        });
    });

    group.bench_function("bind_and_serialize", |b| {
        b.iter(|| {
            let mut bound = page.clone();
            Binder::new(black_box(&doc)).bind(&mut bound);
            update_footer(&mut bound, &doc, 2026);
            render_html(&bound).unwrap()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_content_parser,
    bench_template_parser,
    bench_bind_and_serialize
);
criterion_main!(benches);

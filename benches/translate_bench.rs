use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sacman::translator::CommandTranslator;

/// Benchmark translation throughput over representative invocations
fn bench_translate(c: &mut Criterion) {
    let translator = CommandTranslator::new();
    let mut group = c.benchmark_group("translate");

    for input in &[
        "sacman -Sty nginx.service",
        "sacman -Styuq mpris-proxy",
        "sacman -Qi --no-pager nginx.service",
        "sacman --version",
        "sacman -Qyl foo",
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, &input| {
            b.iter(|| translator.translate(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark the generated reference rendering used by `--help`
fn bench_reference_render(c: &mut Criterion) {
    c.bench_function("reference_render_text", |b| {
        b.iter(|| black_box(sacman::reference::render_text()));
    });
}

criterion_group!(benches, bench_translate, bench_reference_render);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use elemops::{Adapter, FloatAdapter, IntAdapter, StringAdapter};

fn benchmark_render_int(c: &mut Criterion) {
    c.bench_function("render_int", |b| {
        b.iter(|| IntAdapter.render(black_box(&i32::MIN)))
    });
}

fn benchmark_render_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_float");

    let cases = [
        ("whole", 2_059_705.0),
        ("fraction", 1_234_567.890_123_456_78),
        ("scientific", 1.234_567_891_234_57e16),
        ("tiny", f64::MIN_POSITIVE),
    ];

    for (label, value) in cases.iter() {
        group.bench_with_input(BenchmarkId::from_parameter(label), value, |b, value| {
            b.iter(|| FloatAdapter.render(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_parse_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_int");

    group.bench_function("clean", |b| {
        b.iter(|| IntAdapter.from_text(black_box("12345")))
    });

    group.bench_function("trailing_garbage", |b| {
        b.iter(|| IntAdapter.from_text(black_box("12345qwerty")))
    });

    group.bench_function("padded", |b| {
        b.iter(|| IntAdapter.from_text(black_box("   \t-40381 rest of the line")))
    });

    group.finish();
}

fn benchmark_parse_float(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_float");

    group.bench_function("decimal", |b| {
        b.iter(|| FloatAdapter.from_text(black_box("1234.567nbvcxz")))
    });

    group.bench_function("exponent", |b| {
        b.iter(|| FloatAdapter.from_text(black_box("-1.234567890123e-5")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| FloatAdapter.from_text(black_box("0x1F6db9p-19")))
    });

    group.bench_function("keyword", |b| {
        b.iter(|| FloatAdapter.from_text(black_box("-infinity")))
    });

    group.finish();
}

fn benchmark_load_column(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_column");

    for size in [10, 100, 1000].iter() {
        let lines: Vec<String> = (0..*size).map(|i| format!("{} trailing", i * 37)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                lines
                    .iter()
                    .map(|line| IntAdapter.from_text(black_box(line)).unwrap())
                    .sum::<i32>()
            })
        });
    }
    group.finish();
}

fn benchmark_comparison_with_std(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    // the adapter scans past garbage that str::parse would reject, so the
    // std baselines get pre-cleaned input
    group.bench_function("adapter_parse_int", |b| {
        b.iter(|| IntAdapter.from_text(black_box("40381")))
    });

    group.bench_function("std_parse_int", |b| {
        b.iter(|| black_box("40381").parse::<i32>())
    });

    group.bench_function("adapter_render_float", |b| {
        b.iter(|| FloatAdapter.render(black_box(&1234.567)))
    });

    group.bench_function("std_render_float", |b| {
        b.iter(|| black_box(1234.567).to_string())
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    c.bench_function("roundtrip_float", |b| {
        b.iter(|| {
            let rendered = FloatAdapter.render(black_box(&1234.567));
            FloatAdapter.from_text(black_box(&rendered)).unwrap()
        })
    });

    c.bench_function("roundtrip_string", |b| {
        let value = "a string element of a reasonable length".to_string();
        b.iter(|| {
            let rendered = StringAdapter.render(black_box(&value));
            StringAdapter.from_text(black_box(&rendered)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_render_int,
    benchmark_render_float,
    benchmark_parse_int,
    benchmark_parse_float,
    benchmark_load_column,
    benchmark_comparison_with_std,
    benchmark_roundtrip
);
criterion_main!(benches);

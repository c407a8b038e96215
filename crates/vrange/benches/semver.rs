use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vrange::{Comparator, Semver, Version};

fn bench_parse_version(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.2.3-rc.1+build",
        "0.0.1-alpha.2.x.y",
        "=1.2.3",
    ];

    c.bench_function("parse_version", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.2", "1.0.0-beta.11"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.9999.9999", "2.0.0"),
    ];

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (a, bver) in cases {
                black_box(Comparator::compare(black_box(a), black_box(bver)).ok());
            }
        })
    });
}

fn bench_parse_spec(c: &mut Criterion) {
    let specs = [
        ">=1.2.3 <2.0.0",
        "^1.2.3 || ~2.4",
        "1.2.* || 2.*",
        "1.2.3 - 2.0.0",
        "~1.2.1 >=1.2.3",
        ">1.0 <3.0 || >=4.0",
        "^0.0.3",
    ];

    c.bench_function("parse_spec", |b| {
        b.iter(|| {
            for spec in specs {
                black_box(Semver::parse_spec(black_box(spec)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3 <2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("1.2.3", "1.2.* || 2.*"),
        ("2.0.0", "1.0.0 - 2.0.0"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, spec) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(spec)));
            }
        })
    });
}

fn bench_satisfies_parsed(c: &mut Criterion) {
    let cases = [
        "1.2.3",
        "1.2.3-beta",
        "2.4.5",
        "1.9999.9999",
        "1.9.0",
        "2.0.0",
        "0.1.0",
    ];

    let parsed = Semver::parse_spec("^1.2").expect("parse spec");

    c.bench_function("semver_satisfies_parsed", |b| {
        b.iter(|| {
            for version in cases {
                black_box(Semver::satisfies_parsed(black_box(version), black_box(&parsed)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0.0",
        "0.1.0",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "50.2.0",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)));
        })
    });
}

criterion_group!(
    benches,
    bench_parse_version,
    bench_compare,
    bench_parse_spec,
    bench_satisfies,
    bench_satisfies_parsed,
    bench_sort
);
criterion_main!(benches);

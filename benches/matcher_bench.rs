use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rphonemeta::{MatcherApi, PhoneNumberDesc, RegexBasedMatcher};

fn setup_descriptor() -> PhoneNumberDesc {
    let mut desc = PhoneNumberDesc::new();
    // The US general description pattern, a representative real-world case.
    desc.set_national_number_pattern(r"[13-689]\d{9}|2[0-35-9]\d{8}");
    desc
}

fn matching_benchmark(c: &mut Criterion) {
    let matcher = RegexBasedMatcher::new();
    let desc = setup_descriptor();

    // Warm the pattern cache so the loop measures matching, not compilation.
    matcher
        .match_national_number("6502530000", &desc, false)
        .unwrap();

    let mut group = c.benchmark_group("National number matching");

    group.bench_function("full match", |b| {
        b.iter(|| {
            matcher
                .match_national_number(black_box("6502530000"), black_box(&desc), false)
                .unwrap()
        })
    });

    group.bench_function("prefix match on too-long input", |b| {
        b.iter(|| {
            matcher
                .match_national_number(black_box("650253000012345"), black_box(&desc), true)
                .unwrap()
        })
    });

    group.bench_function("mismatch", |b| {
        b.iter(|| {
            matcher
                .match_national_number(black_box("112"), black_box(&desc), true)
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, matching_benchmark);
criterion_main!(benches);

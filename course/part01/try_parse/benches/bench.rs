use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use try_parse::{parse_strict, try_parse};

const INPUTS: [&str; 8] = [
    "456",
    "",
    "12.5",
    "-42",
    "99999999999999999999",
    "  0007  ",
    "-2147483648",
    "not a number",
];

fn bench_parsing(c: &mut Criterion) {
    for input in INPUTS {
        assert_eq!(
            try_parse(input).0,
            parse_strict::<i32>(input).is_ok(),
            "both parsers should accept the same inputs"
        );
    }

    c.bench_function("try_parse", |b| {
        b.iter(|| {
            INPUTS
                .iter()
                .map(|input| try_parse(black_box(input)).1)
                .fold(0i64, |acc, v| acc + i64::from(v))
        })
    });
    c.bench_function("parse_strict", |b| {
        b.iter(|| {
            INPUTS
                .iter()
                .filter_map(|input| parse_strict::<i32>(black_box(input)).ok())
                .fold(0i64, |acc, v| acc + i64::from(v))
        })
    });
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);

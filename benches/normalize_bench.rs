use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonefield::{i18n::CountryId, PHONE_FIELD_UTIL};

type EditEntity = (&'static str, CountryId);

/// A mixed set of edit events: clean keystrokes, pasted formatted numbers,
/// over-long runs and garbage, across prefix styles.
fn setup_edit_data() -> Vec<EditEntity> {
    vec![
        ("0912345678", CountryId::Vn),
        ("912345678", CountryId::Vn),
        ("09 12 34 56 78", CountryId::Vn),
        ("(202) 555-0123", CountryId::Us),
        ("091234567899999999", CountryId::Vn),
        ("16234567890", CountryId::De),
        ("abc", CountryId::Gb),
    ]
}

fn setup_parse_data() -> Vec<&'static str> {
    vec![
        "+840912345678",
        "+84912345678",
        "+12025550123",
        "+4407123456789",
        "0912 345 678",
        "garbage",
    ]
}

fn normalize_benchmark(c: &mut Criterion) {
    let edits = setup_edit_data();

    c.bench_function("normalize_national", |b| {
        b.iter(|| {
            for (raw, id) in &edits {
                let rule = PHONE_FIELD_UTIL.rule_for_id(*id);
                let _ = PHONE_FIELD_UTIL.normalize_national(black_box(rule), black_box(raw));
            }
        })
    });
}

fn parsing_benchmark(c: &mut Criterion) {
    let values = setup_parse_data();

    c.bench_function("parse_canonical_value", |b| {
        b.iter(|| {
            for value in &values {
                let _ = PHONE_FIELD_UTIL.parse(black_box(value));
            }
        })
    });
}

criterion_group!(benches, normalize_benchmark, parsing_benchmark);
criterion_main!(benches);

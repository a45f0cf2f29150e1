use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use futures::executor::block_on;
use thai_address_core::{AddressDb, AddressSearch, Locale, QueryRouter, ThaiAddressProvider};

fn bench_lookups(c: &mut Criterion) {
    let db = AddressDb::load().expect("embedded dataset");

    c.bench_function("find_by_postal_code", |b| {
        b.iter(|| db.find_by_postal_code(black_box("10330"), Locale::Thai))
    });

    c.bench_function("autocomplete_thai", |b| {
        b.iter(|| db.autocomplete(black_box("บางรัก"), 20, Locale::Thai))
    });

    c.bench_function("autocomplete_latin", |b| {
        b.iter(|| db.autocomplete(black_box("chiang"), 20, Locale::Thai))
    });
}

fn bench_router(c: &mut Criterion) {
    let db = AddressDb::load().expect("embedded dataset");
    let router = QueryRouter::new(Arc::new(ThaiAddressProvider::from_db(db, Locale::Thai)));

    for (name, query) in [
        ("route_postal_code", "10330"),
        ("route_compound", "บางรัก"),
        ("route_fallback", "ก"),
    ] {
        c.bench_function(name, |b| {
            b.iter(|| block_on(router.route(black_box(query), true)))
        });
    }
}

criterion_group!(benches, bench_lookups, bench_router);
criterion_main!(benches);

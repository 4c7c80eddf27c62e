use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    Gender, element_counts, four_pillars, luck_periods, relation_table, useful_elements,
};
use saju_time::{BirthMoment, SolarTermTable};

fn pillars_bench(c: &mut Criterion) {
    let birth = BirthMoment::new(1990, 5, 15, 10).unwrap();
    let table = SolarTermTable::embedded();

    let mut group = c.benchmark_group("pillars");
    group.bench_function("four_pillars", |b| {
        b.iter(|| four_pillars(black_box(&birth), table))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let birth = BirthMoment::new(1990, 5, 15, 10).unwrap();
    let pillars = four_pillars(&birth, SolarTermTable::embedded());

    let mut group = c.benchmark_group("analysis");
    group.bench_function("element_counts", |b| {
        b.iter(|| element_counts(black_box(&pillars)))
    });
    group.bench_function("relation_table", |b| {
        b.iter(|| relation_table(black_box(&pillars)))
    });
    group.bench_function("useful_elements", |b| {
        let counts = element_counts(&pillars);
        b.iter(|| useful_elements(black_box(&counts)))
    });
    group.finish();
}

fn luck_bench(c: &mut Criterion) {
    let birth = BirthMoment::new(1990, 5, 15, 10).unwrap();
    let table = SolarTermTable::embedded();

    c.bench_function("luck_periods", |b| {
        b.iter(|| luck_periods(black_box(&birth), Gender::Female, table))
    });
}

criterion_group!(benches, pillars_bench, analysis_bench, luck_bench);
criterion_main!(benches);

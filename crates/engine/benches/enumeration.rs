use criterion::{black_box, criterion_group, criterion_main, Criterion};
use figura_engine::{census, census_parallel, census_stepwise, EightEight, EightFree, FourFour, FourFree};

fn bench_census(c: &mut Criterion) {
    c.bench_function("census_4_free_n10", |b| {
        b.iter(|| census::<FourFree>(black_box(10)))
    });

    c.bench_function("census_8_free_n8", |b| {
        b.iter(|| census::<EightFree>(black_box(8)))
    });

    c.bench_function("census_4_4_n10", |b| {
        b.iter(|| census::<FourFour>(black_box(10)))
    });

    c.bench_function("census_8_8_n8", |b| {
        b.iter(|| census::<EightEight>(black_box(8)))
    });
}

fn bench_stepwise(c: &mut Criterion) {
    c.bench_function("census_stepwise_4_free_n10", |b| {
        b.iter(|| census_stepwise::<FourFree>(black_box(10)))
    });
}

fn bench_parallel(c: &mut Criterion) {
    c.bench_function("census_parallel_4_free_n12_d6", |b| {
        b.iter(|| census_parallel::<FourFree>(black_box(12), black_box(6)))
    });
}

criterion_group!(benches, bench_census, bench_stepwise, bench_parallel);
criterion_main!(benches);

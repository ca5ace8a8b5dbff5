use criterion::{criterion_group, criterion_main, Criterion};
use dockq::program::{vina::Vina, Program};

pub fn read_output(c: &mut Criterion) {
    c.bench_function("read log", |b| {
        b.iter(|| Vina::read_output("testfiles/job_log.txt"))
    });
}

criterion_group!(benches, read_output);
criterion_main!(benches);

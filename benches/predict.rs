//! A benchmark for the session record and predict operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mindreader::session::Session;

fn test_record_run() {
    let mut session = Session::new();
    for _ in 0..100_000 {
        session.record_black();
    }
    black_box(session.len());
}

fn test_record_alternation() {
    let mut session = Session::new();
    for _ in 0..50_000 {
        session.record_black();
        session.record_white();
    }
    black_box(session.len());
}

fn test_record_and_predict() {
    let mut session = Session::new();
    for i in 0..100_000_u32 {
        // A thin pattern mixed with noise from a cheap counter scramble.
        if (i.wrapping_mul(2654435761) >> 28) & 1 == 1 {
            session.record_white();
        } else {
            session.record_black();
        }
        black_box(session.predict_next());
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("record run", |b| b.iter(test_record_run));
    c.bench_function("record alternation", |b| b.iter(test_record_alternation));
    c.bench_function("record and predict", |b| b.iter(test_record_and_predict));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

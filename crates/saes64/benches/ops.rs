use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use saes64::{Opcode, RconIndex, Saes64};

fn bench_cipher_ops(c: &mut Criterion) {
    let unit = Saes64::new();
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let op1 = rng.next_u64();
    let op2 = rng.next_u64();

    let mut group = c.benchmark_group("cipher_ops");
    group.bench_function("encsm", |b| {
        b.iter(|| unit.execute(Opcode::Encsm, black_box(op1), black_box(op2)));
    });
    group.bench_function("decsm", |b| {
        b.iter(|| unit.execute(Opcode::Decsm, black_box(op1), black_box(op2)));
    });
    group.bench_function("imix", |b| {
        b.iter(|| unit.execute(Opcode::Imix, black_box(op1), black_box(op2)));
    });
    group.finish();
}

fn bench_key_schedule_ops(c: &mut Criterion) {
    let unit = Saes64::new();
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let op1 = rng.next_u64();
    let op2 = rng.next_u64();
    let idx = RconIndex::new(4).unwrap();

    let mut group = c.benchmark_group("key_schedule_ops");
    group.bench_function("ks1", |b| {
        b.iter(|| unit.execute(Opcode::Ks1(idx), black_box(op1), black_box(op2)));
    });
    group.bench_function("ks2", |b| {
        b.iter(|| unit.execute(Opcode::Ks2, black_box(op1), black_box(op2)));
    });
    group.finish();
}

criterion_group!(benches, bench_cipher_ops, bench_key_schedule_ops);
criterion_main!(benches);

use blocksim::{reference_generator, BlockDecoder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_decode(c: &mut Criterion) {
    let generator = reference_generator();
    let mut group = c.benchmark_group("exhaustive_decode");

    for k in [4usize, 8, 12] {
        let decoder = BlockDecoder::new(&generator, k).unwrap();
        let codeword = decoder.encode(1).unwrap();
        let received: Vec<f64> = (0..decoder.codeword_length())
            .map(|row| if *codeword.get(row, 0).unwrap() { 1.0 } else { -1.0 })
            .collect();

        group.bench_function(format!("k_{}", k), |b| {
            b.iter(|| decoder.decode(black_box(&received)).unwrap())
        });
    }
    group.finish();
}

fn bench_table_construction(c: &mut Criterion) {
    let generator = reference_generator();
    c.bench_function("table_k_12", |b| {
        b.iter(|| BlockDecoder::new(black_box(&generator), 12).unwrap())
    });
}

criterion_group!(benches, bench_decode, bench_table_construction);
criterion_main!(benches);

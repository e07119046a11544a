use criterion::*;
use num_bigint::BigInt;
use reconstruct_core::{SharePoint, interpolate_at_zero};

fn sample_points(poly: &[BigInt], amount: usize) -> Vec<SharePoint> {
    (1..=amount)
        .map(|x| {
            let x = BigInt::from(x);
            let mut iter = poly.iter().rev();
            let mut y = iter.next().unwrap().to_owned();
            for coeff in iter {
                y *= &x;
                y += coeff;
            }
            SharePoint { x, y }
        })
        .collect()
}

fn run_bench(c: &mut Criterion) {
    for k in [8usize, 32, 128] {
        let poly: Vec<BigInt> = (0..k).map(|i| BigInt::from(i as u64 + 1) << 64u32).collect();
        let points = sample_points(&poly, k);
        c.bench_function(&format!("interpolate_at_zero k={k}"), |b| {
            b.iter(|| black_box(interpolate_at_zero(&points).unwrap()))
        });
    }
}

criterion_group!(benches, run_bench);
criterion_main!(benches);

use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use solvency_mst::merkle_sum_tree::parse_balances;
use solvency_mst::{MerkleSumTree, UserRecord};

const MAX_POWER: u32 = 10;
const SAMPLE_SIZE: usize = 10;

fn sample_records(n: usize) -> Vec<UserRecord> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..n)
        .map(|i| {
            let balances = parse_balances(&format!("BTC:{}.{:02},ETH:{}", i, i % 100, n - i))
                .unwrap();
            UserRecord::new(format!("user_{i}"), balances, &mut rng).unwrap()
        })
        .collect()
}

fn build_tree_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);

    for i in 4..=MAX_POWER {
        let num_records = 2usize.pow(i);
        let records = sample_records(num_records);

        let bench_name = format!("build merkle sum tree for 2 power of {} records", i);
        criterion.bench_function(&bench_name, |b| {
            b.iter(|| {
                MerkleSumTree::from_records(&records).unwrap();
            })
        });
    }
}

fn proof_flow_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);

    let records = sample_records(2usize.pow(MAX_POWER));
    let tree = MerkleSumTree::from_records(&records).unwrap();

    criterion.bench_function("generate inclusion proof", |b| {
        b.iter(|| {
            tree.generate_proof(0).unwrap();
        })
    });

    let proof = tree.generate_proof(0).unwrap();
    criterion.bench_function("verify inclusion proof", |b| {
        b.iter(|| {
            assert!(tree.verify_proof(&records[0], &proof).unwrap());
        })
    });
}

criterion_group!(benches, build_tree_benchmark, proof_flow_benchmark);
criterion_main!(benches);

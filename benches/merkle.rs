use criterion::{black_box, criterion_group, criterion_main, Criterion};
use json_digest::{canonicalize, Algorithm, MerkleHasher, MerkleTree, NativeDigester, Tree};

fn sample_tree(width: usize) -> Tree {
    Tree::array((0..width).map(|i| {
        Tree::object([
            ("id", Tree::from(i as f64)),
            ("title", Tree::from(format!("Document {}", i))),
            ("tags", Tree::array(["a", "b", "c"])),
            ("score", Tree::from(i as f64 / 7.0)),
        ])
    }))
}

fn bench_canonicalize(c: &mut Criterion) {
    let tree = sample_tree(1_000);
    c.bench_function("canonicalize 1k objects", |b| {
        b.iter(|| canonicalize(black_box(&tree)))
    });
}

fn bench_merkle(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let digester = NativeDigester::new();
    let tree = MerkleTree::from(sample_tree(1_000));

    for concurrent in [false, true] {
        let hasher = MerkleHasher::new(&digester, Algorithm::Sha256).concurrent(concurrent);
        let name = format!("merkle sha256 1k objects (concurrent={})", concurrent);
        c.bench_function(&name, |b| {
            b.to_async(&runtime)
                .iter(|| async { hasher.hash(black_box(&tree)).await.unwrap() })
        });
    }
}

criterion_group!(benches, bench_canonicalize, bench_merkle);
criterion_main!(benches);

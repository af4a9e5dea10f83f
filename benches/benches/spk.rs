use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::pairing::Pairing;
use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use benches::RelationData;
use blake2::Blake2b512;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use groupsig_spk::{DlogProof, DlogProofGT, PairingHomomorphismProof, RepresentationProof};

fn dlog_g1(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let g = G1Projective::rand(&mut rng);
    let x = Fr::rand(&mut rng);
    let y = g * x;

    c.bench_function("Dlog proof in G1 - sign", |b| {
        b.iter(|| {
            DlogProof::sign::<Blake2b512, _>(&mut rng, black_box(&y), black_box(&g), &x, b"msg")
                .unwrap()
        })
    });

    let proof = DlogProof::sign::<Blake2b512, _>(&mut rng, &y, &g, &x, b"msg").unwrap();
    c.bench_function("Dlog proof in G1 - verify", |b| {
        b.iter(|| {
            proof
                .verify::<Blake2b512>(black_box(&y), black_box(&g), b"msg")
                .unwrap()
        })
    });
}

fn dlog_gt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let g = Bls12_381::pairing(G1Affine::rand(&mut rng), G2Affine::rand(&mut rng));
    let x = Fr::rand(&mut rng);
    let y = g * x;

    c.bench_function("Dlog proof in GT - sign", |b| {
        b.iter(|| {
            DlogProofGT::<Bls12_381>::sign::<Blake2b512, _>(
                &mut rng,
                black_box(&y),
                black_box(&g),
                &x,
                b"msg",
            )
            .unwrap()
        })
    });

    let proof =
        DlogProofGT::<Bls12_381>::sign::<Blake2b512, _>(&mut rng, &y, &g, &x, b"msg").unwrap();
    c.bench_function("Dlog proof in GT - verify", |b| {
        b.iter(|| {
            proof
                .verify::<Blake2b512>(black_box(&y), black_box(&g), b"msg")
                .unwrap()
        })
    });
}

fn representation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let counts = [2, 4, 8, 15, 20, 30];
    let data = counts
        .iter()
        .map(|count| RelationData::random(&mut rng, *count))
        .collect::<Vec<_>>();

    let mut sign_group = c.benchmark_group("Representation proof - sign");
    for (i, count) in counts.iter().enumerate() {
        let relation = data[i].relation();
        sign_group.bench_with_input(
            BenchmarkId::from_parameter(format!("{} witnesses", count)),
            count,
            |b, &_count| {
                b.iter(|| {
                    RepresentationProof::sign::<Blake2b512, _>(
                        &mut rng,
                        black_box(&relation),
                        black_box(&data[i].witnesses),
                        b"msg",
                    )
                    .unwrap()
                })
            },
        );
    }
    sign_group.finish();

    let mut verify_group = c.benchmark_group("Representation proof - verify");
    for (i, count) in counts.iter().enumerate() {
        let relation = data[i].relation();
        let proof = RepresentationProof::sign::<Blake2b512, _>(
            &mut rng,
            &relation,
            &data[i].witnesses,
            b"msg",
        )
        .unwrap();
        verify_group.bench_with_input(
            BenchmarkId::from_parameter(format!("{} witnesses", count)),
            count,
            |b, &_count| {
                b.iter(|| {
                    proof
                        .verify::<Blake2b512>(black_box(&relation), b"msg")
                        .unwrap()
                })
            },
        );
    }
    verify_group.finish();
}

fn pairing_homomorphism(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let g = G1Affine::rand(&mut rng);
    let xx = G2Affine::rand(&mut rng);
    let y = Bls12_381::pairing(g, xx);

    c.bench_function("Pairing homomorphism proof - sign", |b| {
        b.iter(|| {
            PairingHomomorphismProof::<Bls12_381>::sign::<Blake2b512, _>(
                &mut rng,
                black_box(&g),
                black_box(&y),
                &xx,
                b"msg",
            )
            .unwrap()
        })
    });

    let proof =
        PairingHomomorphismProof::<Bls12_381>::sign::<Blake2b512, _>(&mut rng, &g, &y, &xx, b"msg")
            .unwrap();
    c.bench_function("Pairing homomorphism proof - verify", |b| {
        b.iter(|| {
            proof
                .verify::<Blake2b512>(black_box(&g), black_box(&y), b"msg")
                .unwrap()
        })
    });
}

criterion_group!(
    benches,
    dlog_g1,
    dlog_gt,
    representation,
    pairing_homomorphism
);
criterion_main!(benches);

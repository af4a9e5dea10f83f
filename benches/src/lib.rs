use ark_bls12_381::{Fr, G1Projective};
use ark_std::{rand::RngCore, vec::Vec, UniformRand};
use groupsig_spk::{IndexPair, Relation};

/// Owned data of a relation where every public value shares witness 0, as when a scheme ties several
/// commitments to the member's secret key: `y_0 = g_0 * x_0` and `y_j = g_0 * x_0 + g_j * x_j` for `j > 0`
pub struct RelationData {
    pub y: Vec<G1Projective>,
    pub bases: Vec<G1Projective>,
    pub index_pairs: Vec<IndexPair>,
    pub prods: Vec<usize>,
    pub witnesses: Vec<Fr>,
}

impl RelationData {
    pub fn random<R: RngCore>(rng: &mut R, count: usize) -> Self {
        let bases = (0..count)
            .map(|_| G1Projective::rand(rng))
            .collect::<Vec<_>>();
        let witnesses = (0..count).map(|_| Fr::rand(rng)).collect::<Vec<_>>();
        let mut y = vec![bases[0] * witnesses[0]];
        let mut index_pairs = vec![IndexPair::new(0, 0)];
        let mut prods = vec![1];
        for j in 1..count {
            y.push(bases[0] * witnesses[0] + bases[j] * witnesses[j]);
            index_pairs.push(IndexPair::new(0, 0));
            index_pairs.push(IndexPair::new(j as u16, j as u16));
            prods.push(2);
        }
        Self {
            y,
            bases,
            index_pairs,
            prods,
            witnesses,
        }
    }

    pub fn relation(&self) -> Relation<G1Projective> {
        Relation::new(
            &self.y,
            &self.bases,
            &self.index_pairs,
            &self.prods,
            self.witnesses.len(),
        )
        .unwrap()
    }
}

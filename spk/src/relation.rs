//! Public statement proved by a representation proof.
//!
//! A relation lists public values `y_0, ..., y_{ny-1}` and bases `g_0, ..., g_{ng-1}` and states, for each `j`,
//!
//! `y_j = g_{b_1} * x_{w_1} + g_{b_2} * x_{w_2} + ... + g_{b_p} * x_{w_p}`
//!
//! where `(w_1, b_1), ..., (w_p, b_p)` is the run of `prods[j]` index pairs assigned to `y_j`. Runs are
//! consecutive: `y_0` takes the first `prods[0]` pairs, `y_1` the next `prods[1]` and so on. The same base or
//! witness may appear in any number of pairs, which is how a single proof shows that several public
//! values share a secret.

use crate::error::SpkError;
use ark_ec::Group;
use ark_std::{ops::Range, vec::Vec};
use groupsig_utils::{expect_equality, expect_non_empty};

/// Reference to one term `base * witness` of a relation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexPair {
    pub witness: u16,
    pub base: u16,
}

impl IndexPair {
    pub fn new(witness: u16, base: u16) -> Self {
        Self { witness, base }
    }

    /// Encoding used in the challenge, the witness index followed by the base index, both little-endian
    pub fn to_bytes(&self) -> [u8; 4] {
        let w = self.witness.to_le_bytes();
        let b = self.base.to_le_bytes();
        [w[0], w[1], b[0], b[1]]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation<'a, G: Group> {
    y: &'a [G],
    bases: &'a [G],
    index_pairs: &'a [IndexPair],
    num_witnesses: usize,
    /// Range of `index_pairs` assigned to each public value
    terms: Vec<Range<usize>>,
}

impl<'a, G: Group> Relation<'a, G> {
    /// Build a relation over `num_witnesses` secrets. `prods[j]` is the number of consecutive index pairs
    /// whose terms sum to `y[j]`.
    pub fn new(
        y: &'a [G],
        bases: &'a [G],
        index_pairs: &'a [IndexPair],
        prods: &[usize],
        num_witnesses: usize,
    ) -> Result<Self, SpkError> {
        expect_non_empty!(y, SpkError::NoPublicValues);
        expect_non_empty!(bases, SpkError::NoBases);
        expect_non_empty!(index_pairs, SpkError::NoIndexPairs);
        if num_witnesses == 0 {
            return Err(SpkError::NoWitnesses);
        }
        if num_witnesses > u16::MAX as usize {
            return Err(SpkError::TooManyWitnesses(num_witnesses));
        }
        expect_equality!(prods.len(), y.len(), SpkError::ExpectedSameSizeSequences);

        let mut terms = Vec::with_capacity(prods.len());
        let mut start: usize = 0;
        for (j, p) in prods.iter().enumerate() {
            if *p == 0 {
                return Err(SpkError::ZeroProductCount(j));
            }
            // Each run must end within `index_pairs`, which also rules out overflowing the sum
            let end = match start.checked_add(*p) {
                Some(end) if end <= index_pairs.len() => end,
                _ => {
                    return Err(SpkError::ProductsDoNotCoverIndexPairs(
                        start.saturating_add(*p),
                        index_pairs.len(),
                    ))
                }
            };
            terms.push(start..end);
            start = end;
        }
        expect_equality!(
            start,
            index_pairs.len(),
            SpkError::ProductsDoNotCoverIndexPairs
        );

        for pair in index_pairs {
            if pair.witness as usize >= num_witnesses {
                return Err(SpkError::WitnessIndexOutOfBounds(
                    pair.witness,
                    num_witnesses,
                ));
            }
            if pair.base as usize >= bases.len() {
                return Err(SpkError::BaseIndexOutOfBounds(pair.base, bases.len()));
            }
        }

        Ok(Self {
            y,
            bases,
            index_pairs,
            num_witnesses,
            terms,
        })
    }

    pub fn y(&self) -> &[G] {
        self.y
    }

    pub fn bases(&self) -> &[G] {
        self.bases
    }

    pub fn index_pairs(&self) -> &[IndexPair] {
        self.index_pairs
    }

    pub fn num_public_values(&self) -> usize {
        self.y.len()
    }

    pub fn num_bases(&self) -> usize {
        self.bases.len()
    }

    pub fn num_witnesses(&self) -> usize {
        self.num_witnesses
    }

    /// Index pairs whose terms sum to `y[j]`. Panics if `j` is not less than `num_public_values`.
    pub fn terms(&self, j: usize) -> &[IndexPair] {
        &self.index_pairs[self.terms[j].clone()]
    }

    /// Evaluate the right hand side of the `j`-th equation with `scalars` in place of the witnesses, i.e.
    /// `sum of bases[pair.base] * scalars[pair.witness]` over the pairs assigned to `y[j]`.
    /// `scalars` must have `num_witnesses` elements, which callers check beforehand.
    pub(crate) fn combine(&self, j: usize, scalars: &[G::ScalarField]) -> G {
        self.terms(j)
            .iter()
            .fold(G::zero(), |acc, pair| {
                acc + self.bases[pair.base as usize] * scalars[pair.witness as usize]
            })
    }

    /// Check that `witnesses` satisfy every equation of the relation
    pub fn is_satisfied_by(&self, witnesses: &[G::ScalarField]) -> bool {
        witnesses.len() == self.num_witnesses
            && self
                .y
                .iter()
                .enumerate()
                .all(|(j, y)| self.combine(j, witnesses) == *y)
    }
}

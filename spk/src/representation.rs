//! Signature proof of knowledge of a representation, i.e. of witnesses `x_0, ..., x_{nx-1}` satisfying every
//! equation of a [`Relation`] simultaneously, under a single challenge.
//!
//! 1. Prover chooses a random `r_k` per witness and, for every public value `y_j`, computes the commitment
//!    `T_j` by evaluating the right hand side of `y_j`'s equation with the `r_k` in place of the witnesses
//! 2. Computes challenge `c = H(msg || y_0 || ... || g_0 || ... || index pairs || T_0 || ...)`
//! 3. Computes response `s_k = r_k - c*x_k` per witness and outputs `(c, s_0, ..., s_{nx-1})`
//! 4. Verifier computes `T'_j = y_j * c + (right hand side evaluated with the s_k)`, recomputes the challenge
//!    over the same transcript with the `T'_j` and accepts iff it equals `c`
//!
//! For an honest proof `T'_j = T_j` since evaluating the right hand side is linear in the scalars. Because
//! a witness index may appear in several equations, one response ties all those uses of the witness together.

use crate::{
    challenge::ChallengeHasher,
    error::SpkError,
    relation::Relation,
};
use ark_ec::Group;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    cfg_into_iter, cfg_iter, end_timer, io::Write, rand::RngCore, start_timer, vec::Vec,
    UniformRand,
};
use digest::Digest;
use groupsig_utils::{expect_equality, expect_non_empty, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Prover's state after committing to its randomness
#[derive(Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct RepresentationProtocol<G: Group> {
    /// Commitment to randomness, one per public value
    #[zeroize(skip)]
    pub t: Vec<G>,
    /// Randomness chosen by the prover, one per witness
    blindings: Vec<G::ScalarField>,
    witnesses: Vec<G::ScalarField>,
}

/// Proof of knowledge of a representation. Holds 1 response per witness.
#[serde_as]
#[derive(
    Default,
    Clone,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
pub struct RepresentationProof<G: Group> {
    #[serde_as(as = "ArkObjectBytes")]
    pub c: G::ScalarField,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub s: Vec<G::ScalarField>,
}

impl<G: Group> RepresentationProtocol<G> {
    /// Commit to `blindings`, one per witness of `relation`
    pub fn init(
        relation: &Relation<G>,
        mut witnesses: Vec<G::ScalarField>,
        mut blindings: Vec<G::ScalarField>,
    ) -> Result<Self, SpkError> {
        let n = relation.num_witnesses();
        if witnesses.len() != n || blindings.len() != n {
            let len = if witnesses.len() != n {
                witnesses.len()
            } else {
                blindings.len()
            };
            witnesses.zeroize();
            blindings.zeroize();
            return Err(SpkError::ExpectedSameSizeSequences(len, n));
        }
        let t = cfg_into_iter!(0..relation.num_public_values())
            .map(|j| relation.combine(j, &blindings))
            .collect::<Vec<_>>();
        Ok(Self {
            t,
            blindings,
            witnesses,
        })
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        relation: &Relation<G>,
        writer: W,
    ) -> Result<(), SpkError> {
        RepresentationProof::compute_challenge_contribution(relation, &self.t, writer)
    }

    /// `s_k = blinding_k - challenge * witness_k`
    pub fn gen_proof(self, challenge: &G::ScalarField) -> RepresentationProof<G> {
        let s = cfg_iter!(self.blindings)
            .zip(cfg_iter!(self.witnesses))
            .map(|(r, x)| *r - (*x * challenge))
            .collect::<Vec<_>>();
        RepresentationProof { c: *challenge, s }
    }
}

impl<G: Group> RepresentationProof<G> {
    /// Prove knowledge of `x` satisfying `relation`, binding the proof to `msg`. `x` must have as many
    /// elements as the relation has witnesses.
    pub fn sign<D: Digest, R: RngCore>(
        rng: &mut R,
        relation: &Relation<G>,
        x: &[G::ScalarField],
        msg: &[u8],
    ) -> Result<Self, SpkError> {
        expect_non_empty!(msg, SpkError::EmptyMessage);
        expect_equality!(
            x.len(),
            relation.num_witnesses(),
            SpkError::ExpectedSameSizeSequences
        );
        let sign_time = start_timer!(|| "Sign representation proof");
        let blindings = (0..x.len())
            .map(|_| G::ScalarField::rand(rng))
            .collect::<Vec<_>>();
        let protocol = RepresentationProtocol::init(relation, x.to_vec(), blindings)?;
        let mut hasher = ChallengeHasher::<D>::new();
        hasher.update(msg);
        protocol.challenge_contribution(relation, &mut hasher)?;
        let challenge = hasher.challenge::<G::ScalarField>();
        let proof = protocol.gen_proof(&challenge);
        end_timer!(sign_time);
        Ok(proof)
    }

    /// Returns `Ok(false)` for a proof that doesn't verify, including one with a response count different
    /// from the relation's witness count. Errors are reserved for invalid arguments.
    pub fn verify<D: Digest>(&self, relation: &Relation<G>, msg: &[u8]) -> Result<bool, SpkError> {
        expect_non_empty!(msg, SpkError::EmptyMessage);
        if self.s.len() != relation.num_witnesses() {
            return Ok(false);
        }
        let verify_time = start_timer!(|| "Verify representation proof");
        let t = self.commitments(relation)?;
        let mut hasher = ChallengeHasher::<D>::new();
        hasher.update(msg);
        Self::compute_challenge_contribution(relation, &t, &mut hasher)?;
        let valid = hasher.challenge::<G::ScalarField>() == self.c;
        end_timer!(verify_time);
        Ok(valid)
    }

    /// Commitments recomputed by the verifier, `T'_j = y_j * c + (right hand side of equation j evaluated
    /// with the responses)`. Equal the prover's commitments for an honest proof.
    pub fn commitments(&self, relation: &Relation<G>) -> Result<Vec<G>, SpkError> {
        expect_equality!(
            self.s.len(),
            relation.num_witnesses(),
            SpkError::ExpectedSameSizeSequences
        );
        let t = cfg_into_iter!(0..relation.num_public_values())
            .map(|j| relation.y()[j] * self.c + relation.combine(j, &self.s))
            .collect::<Vec<_>>();
        Ok(t)
    }

    /// Number of responses, equal to the number of witnesses the proof is for
    pub fn len(&self) -> usize {
        self.s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s.is_empty()
    }

    /// Writes `y_0 || ... || g_0 || ... || index pairs || t_0 || ...`
    pub fn compute_challenge_contribution<W: Write>(
        relation: &Relation<G>,
        t: &[G],
        mut writer: W,
    ) -> Result<(), SpkError> {
        for y in relation.y() {
            y.serialize_compressed(&mut writer)?;
        }
        for g in relation.bases() {
            g.serialize_compressed(&mut writer)?;
        }
        for pair in relation.index_pairs() {
            writer
                .write_all(&pair.to_bytes())
                .map_err(|e| SpkError::Serialization(e.into()))?;
        }
        for t in t {
            t.serialize_compressed(&mut writer)?;
        }
        Ok(())
    }
}

//! Signature proof of knowledge of a discrete log, i.e. given public `y` and `g`, prove knowledge of `x` in `g * x = y`.
//!
//! The proof is the short `(c, s)` form of the Schnorr protocol:
//! 1. Prover chooses a random `r` and computes `T = g * r`
//! 2. Computes challenge `c = H(msg || y || g || T)`
//! 3. Computes response `s = r - c*x` and outputs `(c, s)`
//! 4. Verifier computes `T' = g * s + y * c` and `c' = H(msg || y || g || T')`, and accepts iff `c == c'`
//!
//! The protocol only needs a prime order group, so the same code proves discrete logs in G1, G2 and in the
//! target group GT, where `g * x` is written `g^x` in multiplicative notation.

use crate::{challenge::ChallengeHasher, error::SpkError};
use ark_ec::{
    pairing::{Pairing, PairingOutput},
    Group,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, rand::RngCore, UniformRand};
use digest::Digest;
use groupsig_utils::{expect_non_empty, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Prover's state after committing to its randomness
#[derive(Default, Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct DlogProtocol<G: Group> {
    /// Commitment to randomness
    #[zeroize(skip)]
    pub t: G,
    /// Randomness chosen by the prover
    blinding: G::ScalarField,
    /// Prover's secret `x`
    witness: G::ScalarField,
}

/// Proof of knowledge of discrete log
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
pub struct DlogProof<G: Group> {
    #[serde_as(as = "ArkObjectBytes")]
    pub c: G::ScalarField,
    #[serde_as(as = "ArkObjectBytes")]
    pub s: G::ScalarField,
}

pub type DlogProofG1<E> = DlogProof<<E as Pairing>::G1>;
pub type DlogProofG2<E> = DlogProof<<E as Pairing>::G2>;
pub type DlogProofGT<E> = DlogProof<PairingOutput<E>>;

impl<G: Group> DlogProtocol<G> {
    pub fn init(witness: G::ScalarField, blinding: G::ScalarField, base: &G) -> Self {
        Self {
            t: *base * blinding,
            blinding,
            witness,
        }
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        y: &G,
        base: &G,
        writer: W,
    ) -> Result<(), SpkError> {
        DlogProof::compute_challenge_contribution(y, base, &self.t, writer)
    }

    /// `s = blinding - challenge * witness`
    pub fn gen_proof(self, challenge: &G::ScalarField) -> DlogProof<G> {
        DlogProof {
            c: *challenge,
            s: self.blinding - (self.witness * challenge),
        }
    }
}

impl<G: Group> DlogProof<G> {
    /// Prove knowledge of `x` such that `g * x = y`, binding the proof to `msg`
    pub fn sign<D: Digest, R: RngCore>(
        rng: &mut R,
        y: &G,
        g: &G,
        x: &G::ScalarField,
        msg: &[u8],
    ) -> Result<Self, SpkError> {
        expect_non_empty!(msg, SpkError::EmptyMessage);
        let protocol = DlogProtocol::init(*x, G::ScalarField::rand(rng), g);
        let mut hasher = ChallengeHasher::<D>::new();
        hasher.update(msg);
        protocol.challenge_contribution(y, g, &mut hasher)?;
        let challenge = hasher.challenge::<G::ScalarField>();
        Ok(protocol.gen_proof(&challenge))
    }

    /// Returns `Ok(false)` for a proof that doesn't verify, errors are reserved for invalid arguments
    pub fn verify<D: Digest>(&self, y: &G, g: &G, msg: &[u8]) -> Result<bool, SpkError> {
        expect_non_empty!(msg, SpkError::EmptyMessage);
        let t = self.commitment(y, g);
        let mut hasher = ChallengeHasher::<D>::new();
        hasher.update(msg);
        Self::compute_challenge_contribution(y, g, &t, &mut hasher)?;
        Ok(hasher.challenge::<G::ScalarField>() == self.c)
    }

    /// Commitment recomputed by the verifier, `g * s + y * c`. Equals the prover's `T` for an honest proof.
    pub fn commitment(&self, y: &G, g: &G) -> G {
        *g * self.s + *y * self.c
    }

    pub fn compute_challenge_contribution<W: Write>(
        y: &G,
        g: &G,
        t: &G,
        mut writer: W,
    ) -> Result<(), SpkError> {
        y.serialize_compressed(&mut writer)?;
        g.serialize_compressed(&mut writer)?;
        t.serialize_compressed(&mut writer)?;
        Ok(())
    }
}

//! Signature proof of knowledge of a preimage under the homomorphism `phi(X) = e(g, X)` from G2 to GT, i.e.
//! given public `g` in G1 and `Y` in GT, prove knowledge of `X` in G2 such that `e(g, X) = Y`.
//!
//! 1. Prover chooses a random `R` in G2 and computes `T = e(g, R)`
//! 2. Computes challenge `c = H(msg || g || Y || T)`
//! 3. Computes response `S = R + X * c` and outputs `(c, S)`
//! 4. Verifier computes `T' = e(g, S) - Y * c` and `c' = H(msg || g || Y || T')`, and accepts iff `c == c'`
//!
//! This works because `e(g, S) = e(g, R + X * c) = e(g, R) + e(g, X) * c = T + Y * c`. Unlike the discrete log
//! proof, the witness and the response are group elements and not scalars.

use crate::{challenge::ChallengeHasher, error::SpkError};
use ark_ec::{
    pairing::{Pairing, PairingOutput},
    CurveGroup,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{end_timer, io::Write, rand::RngCore, start_timer, UniformRand};
use digest::Digest;
use groupsig_utils::{expect_non_empty, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Prover's state after committing to its randomness
#[derive(Default, Clone, PartialEq, Eq, Debug, Zeroize, ZeroizeOnDrop)]
pub struct PairingHomomorphismProtocol<E: Pairing> {
    /// Commitment to randomness, `e(g, blinding)`
    #[zeroize(skip)]
    pub t: PairingOutput<E>,
    /// Randomness chosen by the prover
    blinding: E::G2,
    /// Prover's secret `X`
    witness: E::G2Affine,
}

/// Proof of knowledge of a preimage of the pairing homomorphism
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
pub struct PairingHomomorphismProof<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub c: E::ScalarField,
    #[serde_as(as = "ArkObjectBytes")]
    pub s: E::G2Affine,
}

impl<E: Pairing> PairingHomomorphismProtocol<E> {
    pub fn init(witness: E::G2Affine, blinding: E::G2, g: &E::G1Affine) -> Self {
        let t = E::pairing(*g, blinding);
        Self {
            t,
            blinding,
            witness,
        }
    }

    pub fn challenge_contribution<W: Write>(
        &self,
        g: &E::G1Affine,
        y: &PairingOutput<E>,
        writer: W,
    ) -> Result<(), SpkError> {
        PairingHomomorphismProof::compute_challenge_contribution(g, y, &self.t, writer)
    }

    /// `s = blinding + witness * challenge`
    pub fn gen_proof(self, challenge: &E::ScalarField) -> PairingHomomorphismProof<E> {
        PairingHomomorphismProof {
            c: *challenge,
            s: (self.blinding + self.witness * challenge).into_affine(),
        }
    }
}

impl<E: Pairing> PairingHomomorphismProof<E> {
    /// Prove knowledge of `xx` such that `e(g, xx) = y`, binding the proof to `msg`
    pub fn sign<D: Digest, R: RngCore>(
        rng: &mut R,
        g: &E::G1Affine,
        y: &PairingOutput<E>,
        xx: &E::G2Affine,
        msg: &[u8],
    ) -> Result<Self, SpkError> {
        expect_non_empty!(msg, SpkError::EmptyMessage);
        let sign_time = start_timer!(|| "Sign pairing homomorphism proof");
        let protocol = PairingHomomorphismProtocol::init(*xx, E::G2::rand(rng), g);
        let mut hasher = ChallengeHasher::<D>::new();
        hasher.update(msg);
        protocol.challenge_contribution(g, y, &mut hasher)?;
        let challenge = hasher.challenge::<E::ScalarField>();
        let proof = protocol.gen_proof(&challenge);
        end_timer!(sign_time);
        Ok(proof)
    }

    /// Returns `Ok(false)` for a proof that doesn't verify, errors are reserved for invalid arguments
    pub fn verify<D: Digest>(
        &self,
        g: &E::G1Affine,
        y: &PairingOutput<E>,
        msg: &[u8],
    ) -> Result<bool, SpkError> {
        expect_non_empty!(msg, SpkError::EmptyMessage);
        let verify_time = start_timer!(|| "Verify pairing homomorphism proof");
        let t = self.commitment(g, y);
        let mut hasher = ChallengeHasher::<D>::new();
        hasher.update(msg);
        Self::compute_challenge_contribution(g, y, &t, &mut hasher)?;
        let valid = hasher.challenge::<E::ScalarField>() == self.c;
        end_timer!(verify_time);
        Ok(valid)
    }

    /// Commitment recomputed by the verifier, `e(g, s) - y * c`, i.e. `e(g, s) / y^c` in multiplicative
    /// notation. Equals the prover's `T` for an honest proof.
    pub fn commitment(&self, g: &E::G1Affine, y: &PairingOutput<E>) -> PairingOutput<E> {
        E::pairing(*g, self.s) - *y * self.c
    }

    pub fn compute_challenge_contribution<W: Write>(
        g: &E::G1Affine,
        y: &PairingOutput<E>,
        t: &PairingOutput<E>,
        mut writer: W,
    ) -> Result<(), SpkError> {
        g.serialize_compressed(&mut writer)?;
        y.serialize_compressed(&mut writer)?;
        t.serialize_compressed(&mut writer)?;
        Ok(())
    }
}

//! Fiat-Shamir challenge generation.
//!
//! The challenge of every proof in this crate is `H(msg || public elements || commitments)` mapped to a
//! scalar. The hasher is written to incrementally, and because it implements `Write`, arkworks objects
//! can serialize straight into it, so the transcript is never buffered.

use crate::error::SpkError;
use ark_ff::PrimeField;
use ark_serialize::CanonicalSerialize;
use ark_std::{
    io::{Result as IoResult, Write},
    vec::Vec,
};
use digest::Digest;
use groupsig_utils::hashing_utils::field_elem_from_digest;

/// Accumulates the Fiat-Shamir transcript. The digest algorithm `D` (e.g. `Blake2b512`) is chosen by the
/// caller and must be the same on the proving and verifying side.
#[derive(Clone, Debug, Default)]
pub struct ChallengeHasher<D: Digest> {
    hasher: D,
}

impl<D: Digest> ChallengeHasher<D> {
    pub fn new() -> Self {
        Self { hasher: D::new() }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.hasher, bytes);
    }

    /// Add the compressed encoding of `element` to the transcript
    pub fn update_element<T: CanonicalSerialize>(&mut self, element: &T) -> Result<(), SpkError> {
        element.serialize_compressed(self).map_err(|e| e.into())
    }

    pub fn finalize(self) -> Vec<u8> {
        self.hasher.finalize().to_vec()
    }

    /// Finalize the transcript and map the digest to a scalar
    pub fn challenge<F: PrimeField>(self) -> F {
        field_elem_from_digest::<F>(&self.hasher.finalize())
    }
}

impl<D: Digest> Write for ChallengeHasher<D> {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

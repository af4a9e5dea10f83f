//! Fixed binary encoding of proofs, shared with the schemes that embed them in signatures.
//!
//! Every scalar and group element is written as a length-prefixed frame (see
//! [`groupsig_utils::length_prefixed`]). The layouts are
//!
//! - [`DlogProof`]: `s || c`
//! - [`RepresentationProof`]: `c || ns || s_0 || ... || s_{ns-1}` where `ns` is the number of responses as
//!   a 2 byte little-endian integer
//! - [`PairingHomomorphismProof`]: `s || c` with `s` a G2 element
//!
//! The relation a proof is about is never encoded; both sides know it from the scheme.

use crate::{
    dlog::DlogProof, error::SpkError, pairing_homomorphism::PairingHomomorphismProof,
    representation::RepresentationProof,
};
use ark_ec::{pairing::Pairing, Group};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{io::Write, vec, vec::Vec};
use groupsig_utils::length_prefixed::{framed_size, read_framed, write_framed};

/// Size of the response count in a representation proof
pub const RESPONSE_COUNT_SIZE: usize = 2;

pub trait ProofCodec: Sized {
    /// Number of bytes `export` produces
    fn serialized_size(&self) -> usize;

    /// Write the proof to `writer`
    fn write_to<W: Write>(&self, writer: W) -> Result<(), SpkError>;

    /// Decode a proof from the start of `bytes`, returning it with the number of bytes it occupied
    fn import(bytes: &[u8]) -> Result<(Self, usize), SpkError>;

    /// Write the proof to the start of `buf`, which must hold at least `serialized_size` bytes. Returns
    /// the number of bytes written.
    fn export_into(&self, buf: &mut [u8]) -> Result<usize, SpkError> {
        let size = self.serialized_size();
        if buf.len() < size {
            return Err(SpkError::BufferTooSmall(size, buf.len()));
        }
        self.write_to(&mut buf[..size])?;
        Ok(size)
    }

    fn export(&self) -> Result<Vec<u8>, SpkError> {
        let mut bytes = vec![0; self.serialized_size()];
        self.export_into(&mut bytes)?;
        Ok(bytes)
    }
}

fn write_element<T: CanonicalSerialize, W: Write>(obj: &T, writer: W) -> Result<(), SpkError> {
    write_framed(obj, writer).map_err(|e| e.into())
}

/// Read the next frame of `bytes` starting at `*offset`, advancing `*offset` past it
fn read_element<T: CanonicalDeserialize>(bytes: &[u8], offset: &mut usize) -> Result<T, SpkError> {
    let rest = bytes
        .get(*offset..)
        .ok_or(SpkError::UnexpectedEndOfInput)?;
    let (obj, read) = read_framed::<T>(rest)?;
    *offset += read;
    Ok(obj)
}

impl<G: Group> ProofCodec for DlogProof<G> {
    fn serialized_size(&self) -> usize {
        framed_size(&self.s) + framed_size(&self.c)
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<(), SpkError> {
        write_element(&self.s, &mut writer)?;
        write_element(&self.c, &mut writer)
    }

    fn import(bytes: &[u8]) -> Result<(Self, usize), SpkError> {
        let mut offset = 0;
        let s = read_element(bytes, &mut offset)?;
        let c = read_element(bytes, &mut offset)?;
        Ok((Self { c, s }, offset))
    }
}

impl<G: Group> ProofCodec for RepresentationProof<G> {
    fn serialized_size(&self) -> usize {
        framed_size(&self.c)
            + RESPONSE_COUNT_SIZE
            + self.s.iter().map(framed_size).sum::<usize>()
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<(), SpkError> {
        let ns = u16::try_from(self.s.len()).map_err(|_| SpkError::TooManyResponses(self.s.len()))?;
        write_element(&self.c, &mut writer)?;
        writer
            .write_all(&ns.to_le_bytes())
            .map_err(|e| SpkError::Serialization(e.into()))?;
        for s in &self.s {
            write_element(s, &mut writer)?;
        }
        Ok(())
    }

    fn import(bytes: &[u8]) -> Result<(Self, usize), SpkError> {
        let mut offset = 0;
        let c = read_element(bytes, &mut offset)?;
        let ns_bytes = bytes
            .get(offset..offset + RESPONSE_COUNT_SIZE)
            .ok_or(SpkError::UnexpectedEndOfInput)?;
        let ns = u16::from_le_bytes([ns_bytes[0], ns_bytes[1]]) as usize;
        offset += RESPONSE_COUNT_SIZE;
        let mut s = Vec::with_capacity(ns);
        for _ in 0..ns {
            s.push(read_element(bytes, &mut offset)?);
        }
        Ok((Self { c, s }, offset))
    }
}

impl<E: Pairing> ProofCodec for PairingHomomorphismProof<E> {
    fn serialized_size(&self) -> usize {
        framed_size(&self.s) + framed_size(&self.c)
    }

    fn write_to<W: Write>(&self, mut writer: W) -> Result<(), SpkError> {
        write_element(&self.s, &mut writer)?;
        write_element(&self.c, &mut writer)
    }

    fn import(bytes: &[u8]) -> Result<(Self, usize), SpkError> {
        let mut offset = 0;
        let s = read_element(bytes, &mut offset)?;
        let c = read_element(bytes, &mut offset)?;
        Ok((Self { c, s }, offset))
    }
}

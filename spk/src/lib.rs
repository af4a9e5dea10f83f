#![cfg_attr(not(feature = "std"), no_std)]

//! Signature proofs of knowledge (SPKs) used by group signature schemes. These are Sigma protocols made
//! non-interactive with the Fiat-Shamir transform and bound to a message, so a scheme's signature is
//! essentially one of these proofs over the scheme's signing relation.
//!
//! 1. [`DlogProof`](dlog::DlogProof): knowledge of `x` in `g * x = y`, in any prime order group (G1, G2 or GT).
//! 2. [`RepresentationProof`](representation::RepresentationProof): knowledge of witnesses satisfying a set
//!    of linear relations `y_j = sum of g_b * x_w` that may share bases and witnesses, under one challenge.
//! 3. [`PairingHomomorphismProof`](pairing_homomorphism::PairingHomomorphismProof): knowledge of `X` in G2
//!    with `e(g, X) = Y`.
//!
//! All proofs are in the short form `(c, s)`: the verifier recomputes the prover's commitments from the
//! responses and checks that they hash to the challenge. Each protocol is also exposed as a prover state
//! with `init`, `challenge_contribution` and `gen_proof` for schemes that combine several proofs under one
//! transcript. [`ProofCodec`](codec::ProofCodec) gives the byte encoding schemes embed in signatures.

extern crate alloc;

pub mod challenge;
pub mod codec;
pub mod dlog;
pub mod error;
pub mod pairing_homomorphism;
pub mod relation;
pub mod representation;

pub use challenge::ChallengeHasher;
pub use codec::ProofCodec;
pub use dlog::{DlogProof, DlogProofG1, DlogProofG2, DlogProofGT, DlogProtocol};
pub use error::{SpkError, SpkErrorKind};
pub use pairing_homomorphism::{PairingHomomorphismProof, PairingHomomorphismProtocol};
pub use relation::{IndexPair, Relation};
pub use representation::{RepresentationProof, RepresentationProtocol};

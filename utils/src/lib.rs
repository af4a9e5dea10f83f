#![cfg_attr(not(feature = "std"), no_std)]

//! Helpers shared by the group signature crates: the length-prefixed framing used when exporting
//! field and group elements, mapping digests to field elements and serde support for arkworks objects.

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod hashing_utils;
pub mod length_prefixed;
pub mod serde_utils;

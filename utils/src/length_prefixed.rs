//! Length-prefixed encoding of field and group elements.
//!
//! Each element is written as a 4 byte little-endian length followed by the element's compressed
//! arkworks encoding. Larger objects (proofs, signatures, keys) are built by concatenating such
//! frames, so a reader always knows where one element ends without knowing the curve in advance.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use ark_std::io::Write;

/// Number of bytes taken by the length header of a frame
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Size of the frame holding `obj`, header included
pub fn framed_size<T: CanonicalSerialize>(obj: &T) -> usize {
    LENGTH_PREFIX_SIZE + obj.compressed_size()
}

/// Write `obj` as a length-prefixed frame
pub fn write_framed<T: CanonicalSerialize, W: Write>(
    obj: &T,
    mut writer: W,
) -> Result<(), SerializationError> {
    let len =
        u32::try_from(obj.compressed_size()).map_err(|_| SerializationError::NotEnoughSpace)?;
    writer.write_all(&len.to_le_bytes())?;
    obj.serialize_compressed(&mut writer)
}

/// Read a single frame from the start of `bytes`. Returns the decoded object and the number of bytes
/// of `bytes` the frame occupied. Fails if `bytes` holds less than the header announces or if the
/// decoded object does not consume the frame's payload exactly.
pub fn read_framed<T: CanonicalDeserialize>(bytes: &[u8]) -> Result<(T, usize), SerializationError> {
    if bytes.len() < LENGTH_PREFIX_SIZE {
        return Err(SerializationError::InvalidData);
    }
    let mut header = [0u8; LENGTH_PREFIX_SIZE];
    header.copy_from_slice(&bytes[..LENGTH_PREFIX_SIZE]);
    let len = u32::from_le_bytes(header) as usize;
    let end = LENGTH_PREFIX_SIZE
        .checked_add(len)
        .ok_or(SerializationError::InvalidData)?;
    if bytes.len() < end {
        return Err(SerializationError::InvalidData);
    }
    let mut payload = &bytes[LENGTH_PREFIX_SIZE..end];
    let obj = T::deserialize_compressed(&mut payload)?;
    if !payload.is_empty() {
        return Err(SerializationError::InvalidData);
    }
    Ok((obj, end))
}

//! Serde support for arkworks objects, which implement only `CanonicalSerialize`/`CanonicalDeserialize`.
//! Use with `serde_with`, e.g. `#[serde_as(as = "ArkObjectBytes")]` or `#[serde_as(as = "Vec<ArkObjectBytes>")]`.

use alloc::vec::Vec;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// Serializes an object as the byte string of its compressed canonical encoding
pub struct ArkObjectBytes;

impl<T: CanonicalSerialize> SerializeAs<T> for ArkObjectBytes {
    fn serialize_as<S: Serializer>(obj: &T, serializer: S) -> Result<S::Ok, S::Error> {
        let mut bytes = Vec::with_capacity(obj.compressed_size());
        obj.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        Serialize::serialize(&bytes, serializer)
    }
}

impl<'de, T: CanonicalDeserialize> DeserializeAs<'de, T> for ArkObjectBytes {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
        let bytes = <Vec<u8>>::deserialize(deserializer)?;
        T::deserialize_compressed(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

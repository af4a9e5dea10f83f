use ark_ff::PrimeField;

/// Map a digest to a field element by interpreting it as a little-endian integer and reducing it
/// modulo the field order. The work done depends only on the length of `digest`, never on its value.
/// Digests at least 128 bits longer than the field modulus (like Blake2b-512 for a 255-bit field)
/// give a statistically uniform result.
pub fn field_elem_from_digest<F: PrimeField>(digest: &[u8]) -> F {
    F::from_le_bytes_mod_order(digest)
}

use ark_serialize::SerializationError;

#[derive(Debug)]
pub enum SpkError {
    /// The message a proof is bound to was empty
    EmptyMessage,
    /// A relation was built without public values
    NoPublicValues,
    /// A relation was built without bases
    NoBases,
    /// A relation was built without index pairs
    NoIndexPairs,
    /// A relation was declared with 0 witnesses
    NoWitnesses,
    /// More witnesses than the 16 bit response count of the wire format allows
    TooManyWitnesses(usize),
    /// More responses than the 16 bit response count of the wire format allows
    TooManyResponses(usize),
    ExpectedSameSizeSequences(usize, usize),
    /// The public value at this index was assigned 0 index pairs
    ZeroProductCount(usize),
    /// Sum of product counts, number of index pairs
    ProductsDoNotCoverIndexPairs(usize, usize),
    /// Witness index, number of witnesses
    WitnessIndexOutOfBounds(u16, usize),
    /// Base index, number of bases
    BaseIndexOutOfBounds(u16, usize),
    /// Bytes needed, bytes available
    BufferTooSmall(usize, usize),
    /// Input ended before a complete proof was read
    UnexpectedEndOfInput,
    Serialization(SerializationError),
}

/// Coarse classification of errors, matching how calling schemes react to them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpkErrorKind {
    /// The caller passed arguments the operation can't work with. Checked before any computation.
    InvalidArgument,
    /// The underlying arithmetic, hashing or (de)serialization failed
    ComputationFailure,
}

impl SpkError {
    pub fn kind(&self) -> SpkErrorKind {
        match self {
            Self::UnexpectedEndOfInput | Self::Serialization(_) => SpkErrorKind::ComputationFailure,
            _ => SpkErrorKind::InvalidArgument,
        }
    }
}

impl From<SerializationError> for SpkError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}

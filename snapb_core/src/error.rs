/// Everything that can go wrong in a single transform call.
///
/// All failures are detected synchronously and nothing is retried; when a
/// decode fails, no partial output reaches the caller. The variants carry
/// the numbers a caller needs to size a retry buffer or report a corrupt
/// block precisely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input or output buffer cannot hold what the operation needs.
    /// On encode this means the destination is smaller than
    /// [`max_compressed_len`](crate::format::max_compressed_len) of the
    /// input, or the input itself is longer than a block header can declare.
    #[error("capacity exceeded: {needed} bytes needed but only {available} available")]
    CapacityExceeded { needed: u64, available: u64 },

    /// The header varint is truncated, longer than 5 bytes, or declares a
    /// length above 2^32 - 1.
    #[error("malformed block header varint")]
    MalformedHeader,

    /// The header declares more bytes than the destination can hold.
    #[error("declared length {declared} exceeds output capacity {capacity}")]
    DeclaredLengthTooLarge { declared: u64, capacity: u64 },

    /// A copy element reaches before the start of the output: its distance
    /// is zero or larger than the number of bytes produced so far.
    #[error("copy distance {distance} invalid with only {produced} bytes produced")]
    InvalidReference { distance: u64, produced: u64 },

    /// An element tag requires more trailing bytes than remain in the input.
    #[error("truncated or malformed element")]
    MalformedElement,

    /// The element stream produced a different number of bytes than the
    /// header declared.
    #[error("block declared {declared} bytes but produced {produced}")]
    LengthMismatch { declared: u64, produced: u64 },
}

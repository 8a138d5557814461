use core::fmt;

/// Errors returned by [`Context`](crate::Context) and the one-shot helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// `update` or `finalize` was called on a finalized context.
    InvalidState,
    /// The message would exceed the length the algorithm can encode.
    LengthOverflow,
    /// The algorithm name is not one of `MD5`, `SHA1`, `SHA224`, `SHA256`,
    /// `SHA384` or `SHA512`.
    UnsupportedAlgorithm,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidState => "digest context already finalized",
            Error::LengthOverflow => "message too long for digest length field",
            Error::UnsupportedAlgorithm => "unsupported digest algorithm",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

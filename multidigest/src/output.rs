use crate::{algorithm::MAX_OUTPUT_SIZE, Algorithm};
use alloc::{string::String, vec::Vec};
use core::fmt;

/// Finished digest of one message.
///
/// Holds exactly [`Algorithm::output_size`] bytes. `Display` and `LowerHex`
/// both render lowercase hex without separators.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    algorithm: Algorithm,
    bytes: [u8; MAX_OUTPUT_SIZE],
}

impl Digest {
    /// `bytes` past the algorithm's output size must be zero.
    pub(crate) fn new(algorithm: Algorithm, bytes: [u8; MAX_OUTPUT_SIZE]) -> Self {
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.algorithm.output_size()]
    }

    /// Lowercase hex rendering, two characters per byte.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Renders the digest in the requested mode.
    pub fn encode(&self, mode: OutputMode) -> Encoded {
        format(self, mode)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}, {:x})", self.algorithm, self)
    }
}

/// How a digest is handed back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputMode {
    /// Digest bytes, unmodified.
    Raw,
    /// Lowercase hex string.
    Hex,
}

impl OutputMode {
    /// Maps a "binary output" flag onto a mode: `true` is [`Raw`](Self::Raw).
    pub fn binary(flag: bool) -> Self {
        if flag {
            OutputMode::Raw
        } else {
            OutputMode::Hex
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        OutputMode::Hex
    }
}

/// A digest rendered by [`format`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Encoded {
    /// Raw digest bytes.
    Raw(Vec<u8>),
    /// Lowercase hex string.
    Hex(String),
}

impl Encoded {
    /// Underlying bytes: the digest itself for `Raw`, ASCII hex for `Hex`.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Encoded::Raw(bytes) => bytes.as_slice(),
            Encoded::Hex(s) => s.as_bytes(),
        }
    }

    /// Hex string, if this is a hex rendering.
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Encoded::Hex(s) => Some(s.as_str()),
            Encoded::Raw(_) => None,
        }
    }

    /// Consumes the rendering, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Encoded::Raw(bytes) => bytes,
            Encoded::Hex(s) => s.into_bytes(),
        }
    }
}

impl AsRef<[u8]> for Encoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Renders `digest` as raw bytes or as lowercase hex.
pub fn format(digest: &Digest, mode: OutputMode) -> Encoded {
    match mode {
        OutputMode::Raw => Encoded::Raw(digest.as_bytes().to_vec()),
        OutputMode::Hex => Encoded::Hex(digest.to_hex()),
    }
}

#[cfg(test)]
mod tests {
    use super::{format, Digest, Encoded, OutputMode};
    use crate::{algorithm::MAX_OUTPUT_SIZE, Algorithm};
    use alloc::string::ToString;

    fn sample() -> Digest {
        let mut bytes = [0u8; MAX_OUTPUT_SIZE];
        bytes[..4].copy_from_slice(&[0x00, 0x0f, 0xa0, 0xff]);
        Digest::new(Algorithm::Md5, bytes)
    }

    #[test]
    fn hex_is_lowercase_and_zero_padded() {
        let hex = sample().to_hex();
        assert_eq!(hex.len(), 32);
        assert!(hex.starts_with("000fa0ff"));
        assert_eq!(hex, sample().to_string());
        assert_eq!(hex, alloc::format!("{:x}", sample()));
    }

    #[test]
    fn raw_keeps_only_output_size_bytes() {
        let raw = format(&sample(), OutputMode::Raw);
        assert_eq!(raw.as_bytes().len(), 16);
        assert_eq!(raw.as_hex(), None);
    }

    #[test]
    fn hex_round_trips_through_raw() {
        let digest = sample();
        let rendered = match format(&digest, OutputMode::Hex) {
            Encoded::Hex(s) => s,
            other => panic!("expected hex, got {:?}", other),
        };
        let raw = hex::decode(&rendered).unwrap();
        assert_eq!(raw, digest.as_bytes());
        assert_eq!(hex::encode(raw), rendered);
    }

    #[test]
    fn formatting_traits_share_hex_encoding() {
        let mut bytes = [0u8; MAX_OUTPUT_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(17);
        }
        let digest = Digest::new(Algorithm::Sha512, bytes);
        let expected = hex::encode(&bytes[..]);
        assert_eq!(digest.to_hex(), expected);
        assert_eq!(alloc::format!("{:x}", digest), expected);
        assert_eq!(digest.to_string(), expected);
        assert_eq!(
            alloc::format!("{:?}", digest),
            alloc::format!("Digest(SHA512, {})", expected)
        );
    }

    #[test]
    fn binary_flag_selects_mode() {
        assert_eq!(OutputMode::binary(true), OutputMode::Raw);
        assert_eq!(OutputMode::binary(false), OutputMode::Hex);
        assert_eq!(OutputMode::default(), OutputMode::Hex);
    }
}

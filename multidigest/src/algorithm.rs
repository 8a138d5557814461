use crate::Error;
use core::{fmt, str::FromStr};
use digest::core_api::{BlockSizeUser, OutputSizeUser};
use md5::Md5Core;
use sha1::Sha1Core;
use sha2::{Sha224Core, Sha256Core, Sha384Core, Sha512Core};

/// Size in bytes of the longest digest, SHA-512.
pub const MAX_OUTPUT_SIZE: usize = 64;

/// Supported digest algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// MD5, RFC 1321.
    Md5,
    /// SHA-1, FIPS 180-4.
    Sha1,
    /// SHA-224, FIPS 180-4.
    Sha224,
    /// SHA-256, FIPS 180-4.
    Sha256,
    /// SHA-384, FIPS 180-4.
    Sha384,
    /// SHA-512, FIPS 180-4.
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, shortest digest first.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Canonical upper-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha224 => "SHA224",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha384 => "SHA384",
            Algorithm::Sha512 => "SHA512",
        }
    }

    /// Compression block size in bytes.
    pub fn block_size(self) -> usize {
        match self {
            Algorithm::Md5 => Md5Core::block_size(),
            Algorithm::Sha1 => Sha1Core::block_size(),
            Algorithm::Sha224 => Sha224Core::block_size(),
            Algorithm::Sha256 => Sha256Core::block_size(),
            Algorithm::Sha384 => Sha384Core::block_size(),
            Algorithm::Sha512 => Sha512Core::block_size(),
        }
    }

    /// Digest size in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Algorithm::Md5 => Md5Core::output_size(),
            Algorithm::Sha1 => Sha1Core::output_size(),
            Algorithm::Sha224 => Sha224Core::output_size(),
            Algorithm::Sha256 => Sha256Core::output_size(),
            Algorithm::Sha384 => Sha384Core::output_size(),
            Algorithm::Sha512 => Sha512Core::output_size(),
        }
    }

    /// Longest message, in bits, the padding length field can describe.
    pub fn max_message_bits(self) -> u128 {
        match self {
            Algorithm::Sha384 | Algorithm::Sha512 => u128::MAX,
            _ => u64::MAX as u128,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Error> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|alg| alg.name() == s)
            .ok_or(Error::UnsupportedAlgorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::{Algorithm, MAX_OUTPUT_SIZE};
    use crate::Error;

    #[test]
    fn sizes() {
        let sizes: [(usize, usize); 6] = [(64, 16), (64, 20), (64, 28), (64, 32), (128, 48), (128, 64)];
        for (alg, &(block, out)) in Algorithm::ALL.iter().zip(sizes.iter()) {
            assert_eq!(alg.block_size(), block, "{}", alg);
            assert_eq!(alg.output_size(), out, "{}", alg);
            assert!(alg.output_size() <= MAX_OUTPUT_SIZE);
        }
    }

    #[test]
    fn names_round_trip() {
        for alg in Algorithm::ALL.iter() {
            assert_eq!(alg.name().parse::<Algorithm>(), Ok(*alg));
        }
    }

    #[test]
    fn names_are_case_sensitive() {
        for name in ["sha256", "Md5", "SHA-1", "SHA3", ""].iter() {
            assert_eq!(name.parse::<Algorithm>(), Err(Error::UnsupportedAlgorithm));
        }
    }
}

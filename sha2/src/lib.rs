//! An implementation of the [SHA-2][1] cryptographic hash algorithms.
//!
//! There are 4 standard algorithms specified in the SHA-2 standard:
//! `Sha224`, `Sha256`, `Sha384` and `Sha512`.
//!
//! Algorithmically, there are only 2 core algorithms: SHA-256 and SHA-512.
//! All other algorithms are just applications of these with different initial
//! hash values, and truncated to different digest bit lengths.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use sha2::{Sha256, Sha512, Digest};
//!
//! // create a Sha256 object
//! let mut hasher = Sha256::new();
//!
//! // write input message
//! hasher.update(b"hello world");
//!
//! // read hash digest and consume hasher
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9
//! ")[..]);
//!
//! // same for Sha512
//! let mut hasher = Sha512::new();
//! hasher.update(b"hello world");
//! let result = hasher.finalize();
//!
//! assert_eq!(result[..], hex!("
//!     309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f
//!     989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f
//! ")[..]);
//! ```
//!
//! Also see [RustCrypto/hashes][2] readme.
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2
//! [2]: https://github.com/RustCrypto/hashes

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};

use digest::core_api::CoreWrapper;

mod consts;
mod core_api;
mod sha256;
mod sha512;

pub use core_api::{Sha224Core, Sha256Core, Sha384Core, Sha512Core};

#[cfg(feature = "compress")]
pub use sha256::compress256;
#[cfg(feature = "compress")]
pub use sha512::compress512;

#[cfg(not(feature = "compress"))]
use sha256::compress256;
#[cfg(not(feature = "compress"))]
use sha512::compress512;

/// SHA-224 hasher.
pub type Sha224 = CoreWrapper<Sha224Core>;
/// SHA-256 hasher.
pub type Sha256 = CoreWrapper<Sha256Core>;
/// SHA-384 hasher.
pub type Sha384 = CoreWrapper<Sha384Core>;
/// SHA-512 hasher.
pub type Sha512 = CoreWrapper<Sha512Core>;

#[cfg(test)]
mod tests {
    use super::{compress256, compress512, consts, Digest, Sha224, Sha384};
    use digest::{
        consts::{U128, U64},
        generic_array::{ArrayLength, GenericArray},
    };

    // Single padded block for the three byte message "abc".
    fn padded_abc<N: ArrayLength<u8>>() -> GenericArray<u8, N> {
        let mut block = GenericArray::<u8, N>::default();
        let n = block.len();
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        // bit length 24, big-endian, ends the block
        block[n - 1] = 24;
        block
    }

    #[test]
    fn sha224_is_truncated_sha256_state() {
        let mut state = consts::H256_224;
        let block: GenericArray<u8, U64> = padded_abc();
        compress256(&mut state, &[block]);

        let mut full = [0u8; 32];
        for (chunk, v) in full.chunks_exact_mut(4).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        assert_eq!(Sha224::digest(b"abc")[..], full[..28]);
    }

    #[test]
    fn sha384_is_truncated_sha512_state() {
        let mut state = consts::H512_384;
        let block: GenericArray<u8, U128> = padded_abc();
        compress512(&mut state, &[block]);

        let mut full = [0u8; 64];
        for (chunk, v) in full.chunks_exact_mut(8).zip(state.iter()) {
            chunk.copy_from_slice(&v.to_be_bytes());
        }
        assert_eq!(Sha384::digest(b"abc")[..], full[..48]);
    }
}

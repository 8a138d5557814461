//! One interface over the MD5, SHA-1 and SHA-2 digests of this workspace.
//!
//! Every algorithm is selected at runtime through [`Algorithm`] and driven
//! through the same [`Context`]. Results come back as a [`Digest`] that can
//! be rendered as raw bytes or as lowercase hex, byte-for-byte identical to
//! `openssl dgst` output for the same input.
//!
//! # Usage
//!
//! ```rust
//! use multidigest::{Algorithm, Encoded, OutputMode};
//!
//! // one-shot, hex output
//! let hex = multidigest::digest(Algorithm::Sha256, "data", OutputMode::Hex)?;
//! assert_eq!(
//!     hex.as_hex(),
//!     Some("3a6eb0790f39ac87c94f3856b2dd2c5d110e6811602261a9a923d3bb23adc8b7"),
//! );
//!
//! // per-algorithm shortcut, raw output
//! let raw = multidigest::md5("data", OutputMode::Raw)?;
//! assert_eq!(raw.as_bytes().len(), 16);
//!
//! // algorithm chosen by name
//! let named = multidigest::digest_named("SHA1", "data", OutputMode::Hex)?;
//! assert_eq!(named, Encoded::Hex("a17c9aaa61e80a1bf71d0d850af4e5baa9800bbd".into()));
//! # Ok::<(), multidigest::Error>(())
//! ```
//!
//! Callers hash bytes only; anything else has to be encoded first.

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod algorithm;
mod context;
mod error;
mod hasher;
mod output;

pub use crate::{
    algorithm::{Algorithm, MAX_OUTPUT_SIZE},
    context::{Context, State},
    error::Error,
    output::{format, Digest, Encoded, OutputMode},
};

/// Digests `data` with `algorithm` and renders the result in `mode`.
pub fn digest(
    algorithm: Algorithm,
    data: impl AsRef<[u8]>,
    mode: OutputMode,
) -> Result<Encoded, Error> {
    let mut ctx = Context::new(algorithm);
    ctx.update(data)?;
    Ok(format(&ctx.finalize()?, mode))
}

/// Like [`digest`], selecting the algorithm by its case-sensitive name.
pub fn digest_named(
    name: &str,
    data: impl AsRef<[u8]>,
    mode: OutputMode,
) -> Result<Encoded, Error> {
    digest(name.parse()?, data, mode)
}

macro_rules! shortcut {
    ($name:ident, $alg:ident, $doc:expr) => {
        #[doc = $doc]
        pub fn $name(data: impl AsRef<[u8]>, mode: OutputMode) -> Result<Encoded, Error> {
            digest(Algorithm::$alg, data, mode)
        }
    };
}

shortcut!(md5, Md5, "MD5 digest of `data`.");
shortcut!(sha1, Sha1, "SHA-1 digest of `data`.");
shortcut!(sha224, Sha224, "SHA-224 digest of `data`.");
shortcut!(sha256, Sha256, "SHA-256 digest of `data`.");
shortcut!(sha384, Sha384, "SHA-384 digest of `data`.");
shortcut!(sha512, Sha512, "SHA-512 digest of `data`.");

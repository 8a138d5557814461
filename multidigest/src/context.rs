use crate::{algorithm::MAX_OUTPUT_SIZE, hasher::Hasher, Algorithm, Digest, Error};
use core::fmt;
use md5::Md5Core;
use sha1::Sha1Core;
use sha2::{Sha224Core, Sha256Core, Sha384Core, Sha512Core};

/// Lifecycle of a [`Context`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Created or reset, nothing fed yet.
    Fresh,
    /// At least one `update` has been applied.
    Active,
    /// `finalize` has run; only [`Context::reset`] leaves this state.
    Finalized,
}

#[derive(Clone)]
enum Engine {
    Md5(Hasher<Md5Core>),
    Sha1(Hasher<Sha1Core>),
    Sha224(Hasher<Sha224Core>),
    Sha256(Hasher<Sha256Core>),
    Sha384(Hasher<Sha384Core>),
    Sha512(Hasher<Sha512Core>),
}

macro_rules! dispatch {
    ($engine:expr, $hasher:ident => $body:expr) => {
        match $engine {
            Engine::Md5($hasher) => $body,
            Engine::Sha1($hasher) => $body,
            Engine::Sha224($hasher) => $body,
            Engine::Sha256($hasher) => $body,
            Engine::Sha384($hasher) => $body,
            Engine::Sha512($hasher) => $body,
        }
    };
}

impl Engine {
    fn new(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Md5 => Engine::Md5(Hasher::new()),
            Algorithm::Sha1 => Engine::Sha1(Hasher::new()),
            Algorithm::Sha224 => Engine::Sha224(Hasher::new()),
            Algorithm::Sha256 => Engine::Sha256(Hasher::new()),
            Algorithm::Sha384 => Engine::Sha384(Hasher::new()),
            Algorithm::Sha512 => Engine::Sha512(Hasher::new()),
        }
    }

    fn feed(&mut self, input: &[u8]) {
        dispatch!(self, h => h.feed(input))
    }

    fn buffered(&self) -> usize {
        dispatch!(self, h => h.buffered())
    }

    fn finish(&mut self, out: &mut [u8]) {
        dispatch!(self, h => h.finish(out))
    }

    fn reset(&mut self) {
        dispatch!(self, h => h.reset())
    }
}

/// Incremental digest computation for one message.
///
/// ```rust
/// use multidigest::{Algorithm, Context, Error};
///
/// let mut ctx = Context::new(Algorithm::Sha1);
/// ctx.update("da")?;
/// ctx.update("ta")?;
/// let digest = ctx.finalize()?;
/// assert_eq!(digest.to_hex(), "a17c9aaa61e80a1bf71d0d850af4e5baa9800bbd");
///
/// assert_eq!(ctx.update("more"), Err(Error::InvalidState));
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone)]
pub struct Context {
    algorithm: Algorithm,
    engine: Engine,
    /// Message bytes accepted so far.
    len: u128,
    state: State,
}

impl Context {
    /// Creates a fresh context for `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            engine: Engine::new(algorithm),
            len: 0,
            state: State::Fresh,
        }
    }

    /// Creates a fresh context from a case-sensitive algorithm name such as
    /// `"SHA256"`.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse().map(Self::new)
    }

    /// Algorithm this context computes.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of message bytes accepted so far.
    pub fn processed_len(&self) -> u128 {
        self.len
    }

    /// Number of bytes buffered while waiting for a full block. Always less
    /// than the algorithm's block size.
    pub fn buffered_len(&self) -> usize {
        self.engine.buffered()
    }

    /// Appends `input` to the message.
    ///
    /// Fails with [`Error::InvalidState`] after `finalize` and with
    /// [`Error::LengthOverflow`] if the total message length would no longer
    /// fit the algorithm's length field. A failed call leaves the context
    /// untouched.
    pub fn update(&mut self, input: impl AsRef<[u8]>) -> Result<(), Error> {
        let input = input.as_ref();
        if self.state == State::Finalized {
            return Err(Error::InvalidState);
        }
        let len = self.checked_len(input.len())?;
        self.engine.feed(input);
        self.len = len;
        self.state = State::Active;
        Ok(())
    }

    /// Pads the message, compresses the closing block(s) and returns the
    /// digest. The context is finalized afterwards.
    pub fn finalize(&mut self) -> Result<Digest, Error> {
        if self.state == State::Finalized {
            return Err(Error::InvalidState);
        }
        let mut out = [0u8; MAX_OUTPUT_SIZE];
        self.engine.finish(&mut out[..self.algorithm.output_size()]);
        self.state = State::Finalized;
        Ok(Digest::new(self.algorithm, out))
    }

    /// Returns the context to [`State::Fresh`], keeping the algorithm.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.len = 0;
        self.state = State::Fresh;
    }

    fn checked_len(&self, additional: usize) -> Result<u128, Error> {
        let len = self
            .len
            .checked_add(additional as u128)
            .ok_or(Error::LengthOverflow)?;
        let bits = len.checked_mul(8).ok_or(Error::LengthOverflow)?;
        if bits > self.algorithm.max_message_bits() {
            return Err(Error::LengthOverflow);
        }
        Ok(len)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("algorithm", &self.algorithm)
            .field("state", &self.state)
            .field("len", &self.len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Context, State};
    use crate::{Algorithm, Error};

    #[test]
    fn lifecycle() {
        let mut ctx = Context::new(Algorithm::Md5);
        assert_eq!(ctx.state(), State::Fresh);
        ctx.update(b"data").unwrap();
        assert_eq!(ctx.state(), State::Active);
        ctx.finalize().unwrap();
        assert_eq!(ctx.state(), State::Finalized);
        ctx.reset();
        assert_eq!(ctx.state(), State::Fresh);
        assert_eq!(ctx.processed_len(), 0);
    }

    #[test]
    fn length_limit_64_bit_field() {
        for alg in [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha224, Algorithm::Sha256].iter() {
            let mut ctx = Context::new(*alg);
            // 2^64 - 8 bits accepted, one more byte would need 2^64
            ctx.len = (u64::MAX as u128) / 8;
            assert_eq!(ctx.update([0u8; 0]), Ok(()));
            assert_eq!(ctx.update([0u8]), Err(Error::LengthOverflow));
            assert_eq!(ctx.processed_len(), (u64::MAX as u128) / 8);
            assert!(ctx.finalize().is_ok());
        }
    }

    #[test]
    fn length_limit_128_bit_field() {
        for alg in [Algorithm::Sha384, Algorithm::Sha512].iter() {
            let mut ctx = Context::new(*alg);
            ctx.len = u128::MAX / 8;
            assert_eq!(ctx.update([0u8]), Err(Error::LengthOverflow));

            ctx.len = u128::MAX / 8 - 1;
            assert_eq!(ctx.update([0u8]), Ok(()));
            assert_eq!(ctx.processed_len(), u128::MAX / 8);
        }
    }

    #[test]
    fn limit_of_64_bit_field_does_not_apply_to_sha512() {
        let mut ctx = Context::new(Algorithm::Sha512);
        ctx.len = (u64::MAX as u128) / 8;
        assert_eq!(ctx.update([0u8; 16]), Ok(()));
    }

    #[test]
    fn failed_update_keeps_state() {
        let mut ctx = Context::new(Algorithm::Sha256);
        ctx.len = (u64::MAX as u128) / 8;
        let before = ctx.buffered_len();
        assert_eq!(ctx.update(b"abc"), Err(Error::LengthOverflow));
        assert_eq!(ctx.buffered_len(), before);
        assert_eq!(ctx.state(), State::Fresh);
    }
}

//! Block feeding on top of a compression core.
//!
//! [`Hasher`] pairs an algorithm core with an eager [`BlockBuffer`]: full
//! blocks go straight to the core and at most `block_size - 1` bytes stay
//! buffered between calls. Padding is left to the core's
//! `finalize_fixed_core`, which knows its length field width and byte order.

use block_buffer::{BlockBuffer, Eager};
use digest::{
    core_api::{BufferKindUser, FixedOutputCore, UpdateCore},
    typenum::{IsLess, Le, NonZero, U256},
    Output, Reset,
};

#[derive(Clone)]
pub(crate) struct Hasher<C>
where
    C: BufferKindUser<BufferKind = Eager>,
    C::BlockSize: IsLess<U256>,
    Le<C::BlockSize, U256>: NonZero,
{
    core: C,
    buffer: BlockBuffer<C::BlockSize, Eager>,
}

impl<C> Hasher<C>
where
    C: BufferKindUser<BufferKind = Eager> + UpdateCore + FixedOutputCore + Default + Reset,
    C::BlockSize: IsLess<U256>,
    Le<C::BlockSize, U256>: NonZero,
{
    pub(crate) fn new() -> Self {
        Self {
            core: C::default(),
            buffer: Default::default(),
        }
    }

    /// Compresses every full block of `input`, keeping the tail buffered.
    pub(crate) fn feed(&mut self, input: &[u8]) {
        let Self { core, buffer } = self;
        buffer.digest_blocks(input, |blocks| core.update_blocks(blocks));
    }

    /// Bytes waiting for a full block.
    pub(crate) fn buffered(&self) -> usize {
        self.buffer.get_pos()
    }

    /// Pads, compresses the closing block(s) and writes the digest to `out`.
    ///
    /// `out` must be exactly the core's output size. The hasher must be
    /// reset before it is fed again.
    pub(crate) fn finish(&mut self, out: &mut [u8]) {
        let mut full = Output::<C>::default();
        self.core.finalize_fixed_core(&mut self.buffer, &mut full);
        out.copy_from_slice(&full);
    }

    pub(crate) fn reset(&mut self) {
        self.core.reset();
        self.buffer.reset();
    }
}

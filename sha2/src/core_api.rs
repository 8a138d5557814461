use crate::consts::{H256_224, H256_256, H512_384, H512_512, STATE_LEN};
use crate::{compress256, compress512};
use core::{fmt, slice::from_ref};
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, FixedOutputCore,
        OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U128, U28, U32, U48, U64},
    HashMarker, Output,
};

macro_rules! impl_sha256_core {
    ($name:ident, $out:ty, $iv:expr, $alg:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            state: [u32; STATE_LEN],
            block_len: u64,
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = U64;
        }

        impl BufferKindUser for $name {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $name {
            type OutputSize = $out;
        }

        impl UpdateCore for $name {
            #[inline]
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
                compress256(&mut self.state, blocks);
            }
        }

        impl FixedOutputCore for $name {
            #[inline]
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                let bs = Self::BlockSize::U64;
                let bit_len = self
                    .block_len
                    .wrapping_mul(bs)
                    .wrapping_add(buffer.get_pos() as u64)
                    .wrapping_mul(8);
                buffer.len64_padding_be(bit_len, |b| compress256(&mut self.state, from_ref(b)));

                // SHA-224 stops after seven words
                for (chunk, v) in out.chunks_exact_mut(4).zip(self.state.iter()) {
                    chunk.copy_from_slice(&v.to_be_bytes());
                }
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self {
                    state: $iv,
                    block_len: 0,
                }
            }
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                *self = Default::default();
            }
        }

        impl AlgorithmName for $name {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($alg)
            }
        }

        opaque_debug::implement!($name);
    };
}

macro_rules! impl_sha512_core {
    ($name:ident, $out:ty, $iv:expr, $alg:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            state: [u64; STATE_LEN],
            block_len: u128,
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = U128;
        }

        impl BufferKindUser for $name {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $name {
            type OutputSize = $out;
        }

        impl UpdateCore for $name {
            #[inline]
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                self.block_len = self.block_len.wrapping_add(blocks.len() as u128);
                compress512(&mut self.state, blocks);
            }
        }

        impl FixedOutputCore for $name {
            #[inline]
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                let bs = Self::BlockSize::U64 as u128;
                let bit_len = self
                    .block_len
                    .wrapping_mul(bs)
                    .wrapping_add(buffer.get_pos() as u128)
                    .wrapping_mul(8);
                buffer.len128_padding_be(bit_len, |b| compress512(&mut self.state, from_ref(b)));

                // SHA-384 stops after six words
                for (chunk, v) in out.chunks_exact_mut(8).zip(self.state.iter()) {
                    chunk.copy_from_slice(&v.to_be_bytes());
                }
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self {
                    state: $iv,
                    block_len: 0,
                }
            }
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                *self = Default::default();
            }
        }

        impl AlgorithmName for $name {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($alg)
            }
        }

        opaque_debug::implement!($name);
    };
}

impl_sha256_core!(Sha224Core, U28, H256_224, "Sha224", "Core SHA-224 hasher state.");
impl_sha256_core!(Sha256Core, U32, H256_256, "Sha256", "Core SHA-256 hasher state.");
impl_sha512_core!(Sha384Core, U48, H512_384, "Sha384", "Core SHA-384 hasher state.");
impl_sha512_core!(Sha512Core, U64, H512_512, "Sha512", "Core SHA-512 hasher state.");

#[cfg(test)]
mod tests {
    use super::{Sha256Core, Sha512Core};
    use digest::{
        core_api::{Buffer, FixedOutputCore},
        Output,
    };

    macro_rules! finish {
        ($core:expr, $ty:ty) => {{
            let mut core: $ty = $core;
            let mut out = Output::<$ty>::default();
            core.finalize_fixed_core(&mut Buffer::<$ty>::default(), &mut out);
            out
        }};
    }

    #[test]
    fn bit_length_wraps_modulo_field_width() {
        // block counts whose bit length is exactly 2^64 / 2^128
        let core = Sha256Core {
            block_len: 1 << 55,
            ..Default::default()
        };
        assert_eq!(finish!(core, Sha256Core), finish!(Sha256Core::default(), Sha256Core));

        let core = Sha512Core {
            block_len: 1 << 118,
            ..Default::default()
        };
        assert_eq!(finish!(core, Sha512Core), finish!(Sha512Core::default(), Sha512Core));
    }
}

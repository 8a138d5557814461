use digest::{consts::U64, generic_array::GenericArray};

mod soft;

use crate::consts::STATE_LEN;

/// SHA-256 compression function.
///
/// Shared by SHA-224 and SHA-256; the two only differ in initial state and
/// in how much of the final state they output.
pub fn compress256(state: &mut [u32; STATE_LEN], blocks: &[GenericArray<u8, U64>]) {
    for block in blocks {
        soft::compress_block(state, block);
    }
}

use digest::{consts::U128, generic_array::GenericArray};

mod soft;

use crate::consts::STATE_LEN;

/// SHA-512 compression function.
pub fn compress512(state: &mut [u64; STATE_LEN], blocks: &[GenericArray<u8, U128>]) {
    for block in blocks {
        soft::compress_block(state, block);
    }
}

use crate::consts::{K, STATE_LEN};
use digest::{consts::U64, generic_array::GenericArray};

fn schedule(block: &GenericArray<u8, U64>) -> [u32; 80] {
    let mut w = [0u32; 80];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

fn compress_block(state: &mut [u32; STATE_LEN], block: &GenericArray<u8, U64>) {
    let w = schedule(block);
    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, word) in w.iter().enumerate() {
        let f = match t {
            0..=19 => (b & c) | (!b & d),
            40..=59 => (b & c) | (b & d) | (c & d),
            _ => b ^ c ^ d,
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(K[t / 20])
            .wrapping_add(*word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// SHA-1 compression function applied to a run of blocks.
pub fn compress(state: &mut [u32; STATE_LEN], blocks: &[GenericArray<u8, U64>]) {
    for block in blocks {
        compress_block(state, block);
    }
}

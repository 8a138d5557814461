use crate::consts::{RC, SHIFTS};
use digest::{consts::U64, generic_array::GenericArray};

#[inline(always)]
fn f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn g(x: u32, y: u32, z: u32) -> u32 {
    (x & z) | (y & !z)
}

#[inline(always)]
fn h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline(always)]
fn i(x: u32, y: u32, z: u32) -> u32 {
    y ^ (x | !z)
}

/// Message word consumed by step `t`.
#[inline(always)]
fn word_index(t: usize) -> usize {
    match t / 16 {
        0 => t,
        1 => (5 * t + 1) % 16,
        2 => (3 * t + 5) % 16,
        _ => (7 * t) % 16,
    }
}

fn compress_block(state: &mut [u32; 4], block: &GenericArray<u8, U64>) {
    let mut x = [0u32; 16];
    for (w, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;
    for t in 0..64 {
        let round = t / 16;
        let mixed = match round {
            0 => f(b, c, d),
            1 => g(b, c, d),
            2 => h(b, c, d),
            _ => i(b, c, d),
        };
        let sum = a
            .wrapping_add(mixed)
            .wrapping_add(RC[t])
            .wrapping_add(x[word_index(t)]);
        let rotated = b.wrapping_add(sum.rotate_left(SHIFTS[round][t % 4]));

        a = d;
        d = c;
        c = b;
        b = rotated;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}

/// MD5 compression function applied to a run of blocks.
pub fn compress(state: &mut [u32; 4], blocks: &[GenericArray<u8, U64>]) {
    for block in blocks {
        compress_block(state, block);
    }
}

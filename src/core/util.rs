use crate::buffer::Bufferable;

// used by both the forward and inverse cipher
pub(crate) fn add_round_key<B: Bufferable>(state: &mut B, round_key: &[u8], round: usize) {
    let base = round * 16;
    for i in 0..16 {
        state.set(i, state.get(i) ^ round_key[base + i]);
    }
}

/// XOR one block of `state` with `iv` in place.
pub(crate) fn xor_block<B: Bufferable, V: Bufferable>(state: &mut B, iv: &V) {
    for i in 0..16 {
        state.set(i, state.get(i) ^ iv.get(i));
    }
}

/// Multiply by x in GF(2^8), reducing by the AES polynomial 0x1b on overflow.
#[inline(always)]
pub(crate) fn xtime(x: u8) -> u8 {
    (x << 1) ^ (((x >> 7) & 1) * 0x1b)
}

/// `[x, 2x, 4x, 8x, 16x]` built by repeated doubling.
#[inline(always)]
pub(crate) fn xtime_multiples(x: u8) -> [u8; 5] {
    let mut m = [x, 0, 0, 0, 0];
    for i in 1..5 {
        m[i] = xtime(m[i - 1]);
    }
    m
}

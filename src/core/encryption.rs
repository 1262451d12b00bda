use super::constants::SBOX;
use super::util::{add_round_key, xtime};
use crate::buffer::Bufferable;

/// Forward cipher over one 16-byte block, in place.
///
/// Round 0 adds the first round key; rounds `1..Nr-1` run the full transform
/// set; the final round skips MixColumns.
pub(crate) fn cipher<B: Bufferable>(state: &mut B, round_key: &[u8], rounds: usize) {
    add_round_key(state, round_key, 0);

    for round in 1..rounds {
        sub_bytes(state);
        shift_rows(state);
        mix_columns(state);
        add_round_key(state, round_key, round);
    }

    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_key, rounds);
}

pub(super) fn sub_bytes<B: Bufferable>(state: &mut B) {
    for i in 0..16 {
        state.set(i, SBOX[state.get(i) as usize]);
    }
}

/// Rows 1-3 rotate left by 1, 2, and 3 byte positions; row 0 is untouched.
/// The state is column-major: byte (row, col) lives at `col * 4 + row`.
pub(super) fn shift_rows<B: Bufferable>(state: &mut B) {
    let mut s = [0u8; 16];
    for (i, byte) in s.iter_mut().enumerate() {
        *byte = state.get(i);
    }

    for row in 1..4 {
        for col in 0..4 {
            state.set(col * 4 + row, s[((col + row) & 3) * 4 + row]);
        }
    }
}

/// Column-wise multiplication by {2,3,1,1}: with `t` the XOR of the whole
/// column, each byte becomes `b ^ t ^ xtime(b ^ next)`.
pub(super) fn mix_columns<B: Bufferable>(state: &mut B) {
    for col in 0..4 {
        let p = col * 4;
        let (a, b, c, d) = (
            state.get(p),
            state.get(p + 1),
            state.get(p + 2),
            state.get(p + 3),
        );
        let t = a ^ b ^ c ^ d;

        state.set(p, a ^ t ^ xtime(a ^ b));
        state.set(p + 1, b ^ t ^ xtime(b ^ c));
        state.set(p + 2, c ^ t ^ xtime(c ^ d));
        state.set(p + 3, d ^ t ^ xtime(d ^ a));
    }
}

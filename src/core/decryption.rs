use super::constants::SBOX_INV;
use super::util::{add_round_key, xtime_multiples};
use crate::buffer::Bufferable;

/// Inverse cipher over one 16-byte block, in place.
///
/// Mirrors the forward cipher in reverse: round `Nr` adds its round key only,
/// rounds `Nr-1..1` run the inverse transform set, and round 0 skips
/// InvMixColumns.
pub(crate) fn inv_cipher<B: Bufferable>(state: &mut B, round_key: &[u8], rounds: usize) {
    add_round_key(state, round_key, rounds);

    for round in (1..rounds).rev() {
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, round_key, round);
        inv_mix_columns(state);
    }

    inv_shift_rows(state);
    inv_sub_bytes(state);
    add_round_key(state, round_key, 0);
}

pub(super) fn inv_sub_bytes<B: Bufferable>(state: &mut B) {
    for i in 0..16 {
        state.set(i, SBOX_INV[state.get(i) as usize]);
    }
}

/// Rows 1-3 rotate right by 1, 2, and 3 byte positions; row 0 is untouched.
pub(super) fn inv_shift_rows<B: Bufferable>(state: &mut B) {
    let mut s = [0u8; 16];
    for (i, byte) in s.iter_mut().enumerate() {
        *byte = state.get(i);
    }

    for row in 1..4 {
        for col in 0..4 {
            state.set(col * 4 + row, s[((col + 4 - row) & 3) * 4 + row]);
        }
    }
}

/// Column-wise multiplication by {14,11,13,9}, with each multiple assembled
/// from the `[x, 2x, 4x, 8x]` doubling table:
/// 14x = 2x+4x+8x, 11x = x+2x+8x, 13x = x+4x+8x, 9x = x+8x.
pub(super) fn inv_mix_columns<B: Bufferable>(state: &mut B) {
    for col in 0..4 {
        let p = col * 4;
        let a = xtime_multiples(state.get(p));
        let b = xtime_multiples(state.get(p + 1));
        let c = xtime_multiples(state.get(p + 2));
        let d = xtime_multiples(state.get(p + 3));

        state.set(
            p,
            (a[1] ^ a[2] ^ a[3]) ^ (b[0] ^ b[1] ^ b[3]) ^ (c[0] ^ c[2] ^ c[3]) ^ (d[0] ^ d[3]),
        );
        state.set(
            p + 1,
            (a[0] ^ a[3]) ^ (b[1] ^ b[2] ^ b[3]) ^ (c[0] ^ c[1] ^ c[3]) ^ (d[0] ^ d[2] ^ d[3]),
        );
        state.set(
            p + 2,
            (a[0] ^ a[2] ^ a[3]) ^ (b[0] ^ b[3]) ^ (c[1] ^ c[2] ^ c[3]) ^ (d[0] ^ d[1] ^ d[3]),
        );
        state.set(
            p + 3,
            (a[0] ^ a[1] ^ a[3]) ^ (b[0] ^ b[2] ^ b[3]) ^ (c[0] ^ c[3]) ^ (d[1] ^ d[2] ^ d[3]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Buffer, Bufferable};
    use crate::core::{cipher, encryption, expand_key};
    use crate::variant::Variant;

    fn sample_state() -> Buffer {
        Buffer::from_bytes(&[
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
            0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
        ])
    }

    #[test]
    fn test_inv_shift_rows() {
        let mut state = sample_state();
        let expected = state.clone();

        encryption::shift_rows(&mut state);
        inv_shift_rows(&mut state);

        assert_eq!(
            state, expected,
            "inverse shift rows does not exactly reverse shift rows"
        );
    }

    #[test]
    fn test_inv_sub_bytes() {
        let mut state = sample_state();
        let expected = state.clone();

        encryption::sub_bytes(&mut state);
        inv_sub_bytes(&mut state);

        assert_eq!(
            state, expected,
            "inverse sub bytes does not exactly reverse sub bytes"
        );
    }

    #[test]
    fn test_inv_mix_columns() {
        let mut state = sample_state();
        let expected = state.clone();

        encryption::mix_columns(&mut state);
        inv_mix_columns(&mut state);

        assert_eq!(
            state, expected,
            "inverse mix columns does not exactly reverse mix columns"
        );
    }

    #[test]
    fn test_inv_cipher_block() {
        let key: [u8; 32] = [
            0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe, //
            0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d, 0x77, 0x81, //
            0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7, //
            0x2d, 0x98, 0x10, 0xa3, 0x09, 0x14, 0xdf, 0xf4,
        ];
        let plaintext: [u8; 16] = [
            0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, //
            0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
        ];

        let variant = Variant::Aes256;
        let round_key = expand_key(&key, variant);

        let mut state = Buffer::from_bytes(&plaintext);
        cipher(&mut state, &round_key, variant.rounds());
        assert_ne!(state.as_slice(), &plaintext);

        inv_cipher(&mut state, &round_key, variant.rounds());
        assert_eq!(
            state.as_slice(),
            &plaintext,
            "inverse cipher does not exactly reverse the forward cipher"
        );
    }

    #[test]
    fn round_transforms_work_through_a_cursor() {
        // the same transform applied through a cursor must only touch the
        // window it is given
        let mut buf = Buffer::from_bytes(&[0xff; 20]);
        for i in 0..16 {
            buf.set(2 + i, i as u8);
        }

        let mut expected = sample_state();
        encryption::shift_rows(&mut expected);

        let mut cursor = buf.cursor(2);
        encryption::shift_rows(&mut cursor);

        assert_eq!(&buf.as_slice()[2..18], expected.as_slice());
        assert_eq!(buf.as_slice()[0], 0xff);
        assert_eq!(buf.as_slice()[1], 0xff);
        assert_eq!(buf.as_slice()[18], 0xff);
        assert_eq!(buf.as_slice()[19], 0xff);
    }
}

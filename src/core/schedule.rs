use super::constants::{RCON, SBOX};
use crate::variant::Variant;

/// AES key schedule (FIPS-197 §5.2).
///
/// Expands `key` into `variant.round_key_size()` bytes of round-key material.
/// The raw key fills the first `Nk` words; every later word `i` XORs a
/// transform of word `i - 1` with word `i - Nk`. At each `Nk` boundary the
/// previous word is rotated, substituted, and mixed with a round constant;
/// 256-bit keys additionally substitute (without rotation) when
/// `i mod Nk == 4`.
pub(crate) fn expand_key(key: &[u8], variant: Variant) -> Vec<u8> {
    debug_assert_eq!(key.len(), variant.key_size());

    let nk = variant.key_words();
    let mut round_key = vec![0u8; variant.round_key_size()];
    round_key[..key.len()].copy_from_slice(key);

    // 4 * (Nr + 1) words of material in total, regardless of Nk
    for i in nk..4 * (variant.rounds() + 1) {
        let t = (i - 1) * 4;
        let mut word = [
            round_key[t],
            round_key[t + 1],
            round_key[t + 2],
            round_key[t + 3],
        ];

        if i % nk == 0 {
            // RotWord, SubWord, then the round constant into the first byte
            word = [
                SBOX[word[1] as usize] ^ RCON[i / nk],
                SBOX[word[2] as usize],
                SBOX[word[3] as usize],
                SBOX[word[0] as usize],
            ];
        } else if nk >= 8 && i % nk == 4 {
            // extra SubWord for 256-bit keys only: no rotation, no constant
            word = [
                SBOX[word[0] as usize],
                SBOX[word[1] as usize],
                SBOX[word[2] as usize],
                SBOX[word[3] as usize],
            ];
        }

        let p = (i - nk) * 4;
        let q = i * 4;
        for j in 0..4 {
            round_key[q + j] = round_key[p + j] ^ word[j];
        }
    }

    round_key
}

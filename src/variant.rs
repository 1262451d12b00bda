//! Fixed per-key-size AES parameters. Selecting a variant is a pure data
//! lookup; all size-dependent behaviour in the cipher core branches on these
//! values alone.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{Error, Result};

/// One of the three AES key sizes.
///
/// Carries the FIPS-197 parameter triple for that size: the round count `Nr`,
/// the key word count `Nk`, and the expanded round-key size in bytes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Variant {
    Aes128,
    Aes192,
    Aes256,
}

impl Variant {
    /// Select the variant matching a raw key length in bytes.
    pub fn for_key_length(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            _ => Err(Error::InvalidKeySize {
                len,
                context: "key must be 16, 24, or 32 bytes long",
            }),
        }
    }

    /// Number of rounds `Nr`.
    pub fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Number of 32-bit words in the key, `Nk`.
    pub fn key_words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Raw key length in bytes, `4 * Nk`.
    pub fn key_size(self) -> usize {
        self.key_words() * 4
    }

    /// Size of the expanded round-key material in bytes,
    /// `16 * (Nr + 1)`.
    pub fn round_key_size(self) -> usize {
        16 * (self.rounds() + 1)
    }

    pub(crate) fn key_size_message(self) -> &'static str {
        match self {
            Self::Aes128 => "key must be 16 bytes long",
            Self::Aes192 => "key must be 24 bytes long",
            Self::Aes256 => "key must be 32 bytes long",
        }
    }

    /// Generate a random key of this variant's size. Returns an error if the
    /// OS RNG fails.
    pub fn random_key(self) -> Result<Vec<u8>> {
        let mut key = vec![0u8; self.key_size()];
        OsRng.try_fill_bytes(&mut key)?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_variant_by_key_length() -> Result<()> {
        assert_eq!(Variant::for_key_length(16)?, Variant::Aes128);
        assert_eq!(Variant::for_key_length(24)?, Variant::Aes192);
        assert_eq!(Variant::for_key_length(32)?, Variant::Aes256);
        Ok(())
    }

    #[test]
    fn rejects_unsupported_key_lengths() {
        for len in [0, 15, 17, 23, 31, 33, 64] {
            assert!(matches!(
                Variant::for_key_length(len),
                Err(Error::InvalidKeySize { len: l, .. }) if l == len
            ));
        }
    }

    #[test]
    fn parameter_triples_match_fips_197() {
        let table = [
            (Variant::Aes128, 10, 4, 176),
            (Variant::Aes192, 12, 6, 208),
            (Variant::Aes256, 14, 8, 240),
        ];
        for (variant, rounds, words, rk_size) in table {
            assert_eq!(variant.rounds(), rounds);
            assert_eq!(variant.key_words(), words);
            assert_eq!(variant.key_size(), words * 4);
            assert_eq!(variant.round_key_size(), rk_size);
        }
    }

    #[test]
    fn random_keys_have_the_right_length() -> Result<()> {
        assert_eq!(Variant::Aes128.random_key()?.len(), 16);
        assert_eq!(Variant::Aes192.random_key()?.len(), 24);
        assert_eq!(Variant::Aes256.random_key()?.len(), 32);
        Ok(())
    }
}

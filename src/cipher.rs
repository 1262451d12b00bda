use std::fmt;
use std::str::FromStr;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::buffer::{Buffer, Bufferable};
use crate::core;
use crate::error::{Error, Result};
use crate::variant::Variant;

/// Cipher block length in bytes, constant for every AES variant.
pub const BLOCK_LENGTH: usize = 16;

/// IV used when the caller supplies an empty one.
pub(crate) const DEFAULT_IV: [u8; BLOCK_LENGTH] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
    0x0f,
];

/// Chaining mode selector. CBC is the only mode this crate implements.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Cbc,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Cbc => "cbc",
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Parse a mode name. Any name other than a supported mode fails with
    /// [`Error::UnsupportedMode`].
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cbc" => Ok(Self::Cbc),
            other => Err(Error::UnsupportedMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// Generate a random one-block IV. Returns an error if the OS RNG fails.
///
/// The default IV exists for reproducible examples and tests; real messages
/// should use a fresh random IV per stream.
pub fn random_iv() -> Result<[u8; BLOCK_LENGTH]> {
    let mut iv = [0u8; BLOCK_LENGTH];
    OsRng.try_fill_bytes(&mut iv)?;
    Ok(iv)
}

/// AES cipher context: the expanded round-key material plus the running CBC
/// IV.
///
/// The round keys are computed once at construction and never change. The
/// running IV is overwritten after every processed block, so successive
/// `encrypt` (or `decrypt`) calls on the same context continue a single CBC
/// stream across calls. That statefulness is intentional: use one context per
/// logical stream, and serialize access externally if a context must be
/// shared between threads.
pub struct Aes {
    variant: Variant,
    round_key: Vec<u8>,
    iv: Buffer,
}

/// The round keys and the running IV are secrets; only the variant is shown.
impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl Aes {
    /// Build a context from a raw key and IV, selecting the variant by key
    /// length (16, 24, or 32 bytes).
    ///
    /// An empty `iv` selects the fixed default IV `00 01 .. 0f`; a non-empty
    /// IV must be exactly one block long.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self> {
        let variant = Variant::for_key_length(key.len())?;
        Self::with_variant(variant, key, iv)
    }

    /// Build a context for an explicitly chosen variant. The key must match
    /// that variant's exact size.
    pub fn with_variant(variant: Variant, key: &[u8], iv: &[u8]) -> Result<Self> {
        if key.len() != variant.key_size() {
            return Err(Error::InvalidKeySize {
                len: key.len(),
                context: variant.key_size_message(),
            });
        }

        let iv = match iv.len() {
            0 => Buffer::from_bytes(&DEFAULT_IV),
            BLOCK_LENGTH => Buffer::from_bytes(iv),
            len => return Err(Error::InvalidIvSize { len }),
        };

        Ok(Self {
            variant,
            round_key: core::expand_key(key, variant),
            iv,
        })
    }

    /// The variant this context was built for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Cipher block length in bytes.
    pub const fn block_length() -> usize {
        BLOCK_LENGTH
    }

    /// Modes this cipher can run.
    pub fn supported_modes() -> &'static [Mode] {
        &[Mode::Cbc]
    }

    /// Encrypt `input` in place under `mode`.
    ///
    /// The input length must be an exact multiple of the block length; the
    /// check runs before any byte is touched, so a failing call leaves the
    /// buffer unmodified. The running IV advances with every block and is
    /// kept for the next call.
    pub fn encrypt<B: Bufferable>(&mut self, input: &mut B, mode: Mode) -> Result<()> {
        match mode {
            Mode::Cbc => self.encrypt_cbc(input),
        }
    }

    /// Decrypt `input` in place under `mode`. Same length contract and IV
    /// statefulness as [`encrypt`](Self::encrypt).
    pub fn decrypt<B: Bufferable>(&mut self, input: &mut B, mode: Mode) -> Result<()> {
        match mode {
            Mode::Cbc => self.decrypt_cbc(input),
        }
    }

    fn encrypt_cbc<B: Bufferable>(&mut self, input: &mut B) -> Result<()> {
        let len = input.length();
        if len % BLOCK_LENGTH != 0 {
            return Err(Error::InvalidInputSize { len });
        }

        let rounds = self.variant.rounds();
        let mut cursor = input.cursor(0);

        for _ in (0..len).step_by(BLOCK_LENGTH) {
            core::xor_block(&mut cursor, &self.iv);
            core::cipher(&mut cursor, &self.round_key, rounds);

            // the ciphertext block just produced becomes the next IV
            cursor.copy_to(&mut self.iv, Some(BLOCK_LENGTH), 0, false, Some(0))?;
            cursor.advance(BLOCK_LENGTH as isize);
        }

        Ok(())
    }

    fn decrypt_cbc<B: Bufferable>(&mut self, input: &mut B) -> Result<()> {
        let len = input.length();
        if len % BLOCK_LENGTH != 0 {
            return Err(Error::InvalidInputSize { len });
        }

        let rounds = self.variant.rounds();
        let mut next_iv = Buffer::with_size(BLOCK_LENGTH);
        let mut cursor = input.cursor(0);

        for _ in (0..len).step_by(BLOCK_LENGTH) {
            // save the incoming ciphertext block before it is destroyed
            cursor.copy_to(&mut next_iv, Some(BLOCK_LENGTH), 0, false, Some(0))?;

            core::inv_cipher(&mut cursor, &self.round_key, rounds);
            core::xor_block(&mut cursor, &self.iv);

            next_iv.copy_to(&mut self.iv, Some(BLOCK_LENGTH), 0, false, Some(0))?;
            cursor.advance(BLOCK_LENGTH as isize);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_only_supported_names() {
        assert_eq!("cbc".parse::<Mode>().unwrap(), Mode::Cbc);
        assert_eq!(Mode::Cbc.name(), "cbc");

        for name in ["ecb", "ctr", "gcm", "CBC", ""] {
            assert!(matches!(
                name.parse::<Mode>(),
                Err(Error::UnsupportedMode { mode }) if mode == name
            ));
        }
    }

    #[test]
    fn construction_validates_key_and_iv() {
        let key = [0u8; 16];

        assert!(Aes::new(&key, &[]).is_ok());
        assert!(Aes::new(&key, &[0u8; 16]).is_ok());

        assert!(matches!(
            Aes::new(&[0u8; 15], &[]),
            Err(Error::InvalidKeySize { len: 15, .. })
        ));
        assert!(matches!(
            Aes::new(&key, &[0u8; 8]),
            Err(Error::InvalidIvSize { len: 8 })
        ));
        assert!(matches!(
            Aes::new(&key, &[0u8; 17]),
            Err(Error::InvalidIvSize { len: 17 })
        ));
    }

    #[test]
    fn contexts_construct_for_every_key_size() -> Result<()> {
        for len in [16, 24, 32] {
            let cipher = Aes::new(&vec![0u8; len], &[])?;
            assert_eq!(cipher.variant().key_size(), len);
        }
        Ok(())
    }

    #[test]
    fn debug_output_hides_key_material() -> Result<()> {
        let cipher = Aes::new(&[0u8; 16], &[])?;
        assert_eq!(format!("{cipher:?}"), "Aes { variant: Aes128, .. }");
        Ok(())
    }

    #[test]
    fn explicit_variant_requires_its_exact_key_size() {
        let err = Aes::with_variant(Variant::Aes256, &[0u8; 16], &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid key size: 16 bytes (key must be 32 bytes long)"
        );
    }

    #[test]
    fn failed_alignment_check_leaves_the_buffer_untouched() -> Result<()> {
        let mut cipher = Aes::new(&[0u8; 16], &[])?;
        let mut data = Buffer::from_bytes(&[0xab; 17]);

        assert!(matches!(
            cipher.encrypt(&mut data, Mode::Cbc),
            Err(Error::InvalidInputSize { len: 17 })
        ));
        assert_eq!(data.as_slice(), &[0xab; 17]);

        assert!(matches!(
            cipher.decrypt(&mut data, Mode::Cbc),
            Err(Error::InvalidInputSize { len: 17 })
        ));
        assert_eq!(data.as_slice(), &[0xab; 17]);
        Ok(())
    }

    #[test]
    fn empty_input_is_a_valid_zero_block_stream() -> Result<()> {
        let mut cipher = Aes::new(&[0u8; 16], &[])?;
        let mut data = Buffer::new();

        cipher.encrypt(&mut data, Mode::Cbc)?;
        assert_eq!(data.length(), 0);
        Ok(())
    }
}

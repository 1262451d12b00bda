//! AES-128/192/256 in CBC mode with PKCS7 padding, built on a mutable byte
//! buffer abstraction that lets every transform run in place.
//!
//! The cipher core is implemented from scratch and is not hardened against
//! side channels; treat this crate as educational.
//!
//! ```
//! # fn main() -> crudecrypt::Result<()> {
//! use crudecrypt::{Aes, Buffer, Mode, Variant, pkcs7};
//!
//! let key = Variant::Aes128.random_key()?;
//!
//! let mut data = Buffer::from_bytes(b"attack at dawn");
//! pkcs7::pad(&mut data, Aes::block_length())?;
//!
//! let mut cipher = Aes::new(&key, &[])?;
//! cipher.encrypt(&mut data, Mode::Cbc)?;
//!
//! // a fresh context restarts the CBC stream for decryption
//! let mut cipher = Aes::new(&key, &[])?;
//! cipher.decrypt(&mut data, Mode::Cbc)?;
//! pkcs7::unpad(&mut data, Aes::block_length())?;
//!
//! assert_eq!(data.as_slice(), b"attack at dawn");
//! # Ok(())
//! # }
//! ```

mod buffer;
mod cipher;
mod core;
mod cursor;
mod error;
mod variant;

pub mod pkcs7;

pub use buffer::{Buffer, Bufferable, MAX_SIZE};
pub use cipher::{Aes, BLOCK_LENGTH, Mode, random_iv};
pub use cursor::BufferCursor;
pub use error::{Error, Result};
pub use variant::Variant;

//! AES cipher core: fixed tables, key schedule, and the forward and inverse
//! round transforms. Every transform operates in place on one 16-byte block
//! viewed through a [`Bufferable`](crate::buffer::Bufferable) window,
//! addressed as a 4x4 byte matrix in column-major order.

mod constants;
mod decryption;
mod encryption;
mod schedule;
mod util;

pub(crate) use decryption::inv_cipher;
pub(crate) use encryption::cipher;
pub(crate) use schedule::expand_key;
pub(crate) use util::xor_block;

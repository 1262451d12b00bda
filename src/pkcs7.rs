//! PKCS7 padding over [`Bufferable`] windows.

use crate::buffer::Bufferable;
use crate::error::{Error, Result};

/// Pad `input` to the next multiple of `block_length` by appending
/// `padding_length` bytes, each holding the value `padding_length`.
///
/// A buffer already aligned to `block_length` still receives a full extra
/// block of padding, so the result is always unambiguous to strip. Returns
/// the number of bytes appended, always in `1..=block_length`.
pub fn pad<B: Bufferable>(input: &mut B, block_length: usize) -> Result<usize> {
    check_block_length(block_length)?;

    let padding_length = block_length - (input.length() % block_length);
    let padding = vec![padding_length as u8; padding_length];
    input.append(&padding);

    Ok(padding_length)
}

/// Strip PKCS7 padding according to the trailing length byte. Returns the
/// number of bytes removed.
///
/// When the buffer is shorter than one block, or the claimed padding length
/// exceeds `block_length`, the buffer is left untouched and 0 is returned;
/// neither case is an error. Only the final byte is inspected: the remaining
/// claimed padding bytes are deliberately not checked against it, which is
/// weaker than strict PKCS7 validation. Callers that need the strict check
/// must verify the tail themselves before calling.
pub fn unpad<B: Bufferable>(input: &mut B, block_length: usize) -> Result<usize> {
    check_block_length(block_length)?;

    let length = input.length();
    if length < block_length {
        return Ok(0);
    }

    let padding_length = input.get(length - 1) as usize;
    if padding_length > block_length {
        return Ok(0);
    }

    input.adjust(length - padding_length)?;
    Ok(padding_length)
}

fn check_block_length(block_length: usize) -> Result<()> {
    if block_length < 2 {
        return Err(Error::InvalidArgument {
            context: "block length must be at least 2",
        });
    }
    Ok(())
}

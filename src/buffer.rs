//! Owning byte buffer plus the [`Bufferable`] contract shared with
//! [`BufferCursor`]. All cipher primitives in this crate operate through this
//! contract so they can transform a buffer, or a window into one, in place.

use crate::cursor::BufferCursor;
use crate::error::{Error, Result};

/// Largest representable buffer size. Matches the allocation limit of `Vec`.
pub const MAX_SIZE: usize = isize::MAX as usize;

/// Read/write/copy contract shared by [`Buffer`] and [`BufferCursor`].
///
/// Every operation addresses bytes from index 0 of the window; a cursor adds
/// its base offset before delegating to the underlying buffer, so algorithms
/// written against this trait can walk a buffer blockwise without copying
/// blocks out.
pub trait Bufferable {
    /// Current logical length of the window in bytes.
    fn length(&self) -> usize;

    /// Set the logical length. Growing zero-fills the new trailing bytes;
    /// shrinking truncates. Returns the new length of the underlying buffer.
    fn adjust(&mut self, size: usize) -> Result<usize>;

    /// Read the byte at `index`. Out-of-range reads return 0 rather than
    /// failing.
    fn get(&self, index: usize) -> u8;

    /// Write the byte at `index`. An index past the end grows the buffer to
    /// `index + 1`; this accommodation is deliberate, not an error path.
    fn set(&mut self, index: usize, value: u8);

    /// Bulk read of up to `n` bytes starting at `index`, or all remaining
    /// bytes when `n` is `None`. With `pad` set, the result is zero-padded to
    /// exactly `n` bytes when fewer remain.
    fn read(&self, n: Option<usize>, index: usize, pad: bool) -> Vec<u8>;

    /// Write `value` starting at `index`, growing the buffer as needed.
    /// Never shrinks. Returns the new length.
    fn insert(&mut self, value: &[u8], index: usize) -> Result<usize>;

    /// Append `value` at the end of the underlying buffer. Returns the new
    /// length.
    fn append(&mut self, value: &[u8]) -> usize;

    /// Borrow a cursor positioned `index` bytes into this window.
    fn cursor(&mut self, index: usize) -> BufferCursor<'_>;

    /// Copy up to `n` bytes (`None` = all remaining) starting at `index` into
    /// `dest`: appended when `dest_index` is `None`, written at `dest_index`
    /// otherwise. `pad` zero-fills exactly as in [`read`](Self::read).
    /// Returns the number of bytes actually copied from the source, not
    /// counting padding.
    fn copy_to<D: Bufferable>(
        &self,
        dest: &mut D,
        n: Option<usize>,
        index: usize,
        pad: bool,
        dest_index: Option<usize>,
    ) -> Result<usize> {
        let left = self.length().saturating_sub(index);
        let copied = match n {
            Some(k) => k.min(left),
            None => left,
        };

        let data = self.read(n, index, pad);
        match dest_index {
            Some(i) => {
                dest.insert(&data, i)?;
            }
            None => {
                dest.append(&data);
            }
        }

        Ok(copied)
    }
}

/// Resizable, zero-fillable contiguous byte sequence.
///
/// The buffer owns its bytes; cipher and padding operations mutate it in
/// place and ownership stays with the caller throughout.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-filled buffer of `size` bytes.
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0u8; size],
        }
    }

    /// Buffer holding a copy of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Borrow the raw bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl From<&[u8]> for Buffer {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl Bufferable for Buffer {
    fn length(&self) -> usize {
        self.data.len()
    }

    fn adjust(&mut self, size: usize) -> Result<usize> {
        if size > MAX_SIZE {
            return Err(Error::InvalidArgument {
                context: "size exceeds the maximum buffer size",
            });
        }

        self.data.resize(size, 0);
        Ok(size)
    }

    fn get(&self, index: usize) -> u8 {
        self.data.get(index).copied().unwrap_or(0)
    }

    fn set(&mut self, index: usize, value: u8) {
        if index >= self.data.len() {
            self.data.resize(index + 1, 0);
        }
        self.data[index] = value;
    }

    fn read(&self, n: Option<usize>, index: usize, pad: bool) -> Vec<u8> {
        let len = self.data.len();
        let start = index.min(len);

        match n {
            None => self.data[start..].to_vec(),
            Some(k) => {
                let end = start.saturating_add(k).min(len);
                let mut out = self.data[start..end].to_vec();
                if pad && out.len() < k {
                    out.resize(k, 0);
                }
                out
            }
        }
    }

    fn insert(&mut self, value: &[u8], index: usize) -> Result<usize> {
        if value.is_empty() {
            return Ok(self.data.len());
        }

        let end = index
            .checked_add(value.len())
            .filter(|&end| end <= MAX_SIZE)
            .ok_or(Error::InvalidArgument {
                context: "insert range exceeds the maximum buffer size",
            })?;

        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[index..end].copy_from_slice(value);

        Ok(self.data.len())
    }

    fn append(&mut self, value: &[u8]) -> usize {
        self.data.extend_from_slice(value);
        self.data.len()
    }

    fn cursor(&mut self, index: usize) -> BufferCursor<'_> {
        BufferCursor::new(self, index)
    }
}

//! Non-owning, offset-relative window onto a [`Buffer`].

use crate::buffer::{Buffer, Bufferable, MAX_SIZE};
use crate::error::{Error, Result};

/// A `(buffer, offset)` pair exposing the same operation set as [`Buffer`],
/// with every index shifted by the cursor's base position before delegating.
///
/// The cursor borrows its buffer mutably and cannot outlive it. An offset at
/// or beyond the buffer's length denotes a zero-length view, not an error.
/// The CBC driver uses a cursor to walk a buffer block-by-block without
/// copying blocks out.
pub struct BufferCursor<'a> {
    buffer: &'a mut Buffer,
    index: usize,
}

impl<'a> BufferCursor<'a> {
    pub fn new(buffer: &'a mut Buffer, index: usize) -> Self {
        Self { buffer, index }
    }

    /// Absolute offset of the cursor within the underlying buffer.
    pub fn position(&self) -> usize {
        self.index
    }

    /// Reposition the cursor by `delta` bytes, clamped to 0 below and to just
    /// under the representable limit above. Returns the new absolute offset.
    pub fn advance(&mut self, delta: isize) -> usize {
        if delta == 0 {
            return self.index;
        }

        let index = if delta < 0 {
            self.index.saturating_sub(delta.unsigned_abs())
        } else {
            self.index
                .saturating_add(delta as usize)
                .min(MAX_SIZE - 1)
        };

        self.index = index;
        index
    }
}

impl Bufferable for BufferCursor<'_> {
    fn length(&self) -> usize {
        self.buffer.length().saturating_sub(self.index)
    }

    fn adjust(&mut self, size: usize) -> Result<usize> {
        let total = self.index.checked_add(size).ok_or(Error::InvalidArgument {
            context: "size exceeds the maximum buffer size",
        })?;

        self.buffer.adjust(total)
    }

    fn get(&self, index: usize) -> u8 {
        match self.index.checked_add(index) {
            Some(i) => self.buffer.get(i),
            None => 0,
        }
    }

    fn set(&mut self, index: usize, value: u8) {
        self.buffer.set(self.index + index, value);
    }

    fn read(&self, n: Option<usize>, index: usize, pad: bool) -> Vec<u8> {
        self.buffer.read(n, self.index.saturating_add(index), pad)
    }

    fn insert(&mut self, value: &[u8], index: usize) -> Result<usize> {
        let at = self.index.checked_add(index).ok_or(Error::InvalidArgument {
            context: "insert range exceeds the maximum buffer size",
        })?;

        self.buffer.insert(value, at)
    }

    fn append(&mut self, value: &[u8]) -> usize {
        self.buffer.append(value)
    }

    fn cursor(&mut self, index: usize) -> BufferCursor<'_> {
        self.buffer.cursor(self.index.saturating_add(index))
    }
}

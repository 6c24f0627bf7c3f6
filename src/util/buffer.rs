//! Shared content buffer
//!
//! Every file of a run is written from one buffer. The bytes increment from a
//! random start value, so files produced by two different runs are unlikely to
//! have the same content, while every file within a run is identical.

use rand::rngs::OsRng;
use rand::RngCore;
use std::ops::Deref;
use std::sync::Arc;

/// Immutable content buffer shared by all workers
///
/// Cloning is cheap: clones share the same allocation. Byte `i` holds
/// `(i + offset) mod 256`.
#[derive(Debug, Clone)]
pub struct ContentBuffer {
    data: Arc<[u8]>,
    offset: u8,
}

impl ContentBuffer {
    /// Create a buffer of `size` bytes with a random start offset
    ///
    /// The offset comes from the operating system's random source. If that
    /// source is unavailable a warning is printed and offset 0 is used.
    pub fn generate(size: usize) -> Self {
        Self::generate_with(size, &mut OsRng)
    }

    /// Create a buffer of `size` bytes, drawing the start offset from `rng`
    pub fn generate_with<R: RngCore>(size: usize, rng: &mut R) -> Self {
        Self::with_offset(size, offset_from(rng))
    }

    /// Create a buffer of `size` bytes starting at a fixed offset
    pub fn with_offset(size: usize, offset: u8) -> Self {
        let data: Arc<[u8]> = (0..size)
            .map(|i| (i as u8).wrapping_add(offset))
            .collect();

        Self { data, offset }
    }

    /// Start value of the byte sequence
    #[inline]
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Size of the buffer in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for ContentBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

/// Draw a start offset in [0, 256), falling back to 0 if `rng` fails
fn offset_from<R: RngCore>(rng: &mut R) -> u8 {
    let mut byte = [0u8; 1];
    match rng.try_fill_bytes(&mut byte) {
        Ok(()) => byte[0],
        Err(e) => {
            eprintln!("Warning: random source unavailable ({}), using start value 0", e);
            0
        }
    }
}

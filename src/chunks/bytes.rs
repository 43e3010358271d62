use crate::chunk::Chunk;
use std::fmt;
use std::sync::Arc;

/// A chunk of raw bytes
///
/// Shares its storage between clones; slicing only moves the window.
/// Appending to a chunk that holds the only reference to its storage writes
/// into the storage's spare capacity; otherwise the window is copied into
/// fresh storage with room to grow.
#[derive(Clone)]
pub struct ByteChunk {
    data: Arc<Vec<u8>>,
    start: usize,
    end: usize,
}

impl ByteChunk {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let end = data.len();
        ByteChunk {
            data: Arc::new(data),
            start: 0,
            end,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[self.start..self.end]
    }

    fn window(&self, from: usize, to: usize) -> Self {
        assert!(
            from <= to && to <= self.len(),
            "byte window {from}..{to} out of range for chunk of length {}",
            self.len()
        );
        ByteChunk {
            data: Arc::clone(&self.data),
            start: self.start + from,
            end: self.start + to,
        }
    }
}

impl Chunk for ByteChunk {
    type Element = u8;

    fn empty() -> Self {
        ByteChunk::new(Vec::<u8>::new())
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn unchecked_head(&self) -> u8 {
        self.as_bytes()[0]
    }

    fn unchecked_tail(&self) -> Self {
        self.window(1, self.len())
    }

    fn length_at_least(&self, offset: usize, n: usize) -> bool {
        self.len()
            .checked_sub(offset)
            .is_some_and(|remaining| remaining >= n)
    }

    fn len(&self) -> usize {
        self.end - self.start
    }

    fn width(&self) -> usize {
        self.len()
    }

    fn to_char(element: u8) -> char {
        char::from(element)
    }

    fn substring(&self, offset: usize, n: usize) -> Self {
        self.window(offset, offset + n)
    }

    fn unchecked_drop(&self, offset: usize) -> Self {
        self.window(offset, self.len())
    }

    fn append(mut self, other: &Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other.clone();
        }
        if let Some(data) = Arc::get_mut(&mut self.data) {
            data.truncate(self.end);
            data.extend_from_slice(other.as_bytes());
            self.end = data.len();
            return self;
        }
        let mut joined = Vec::with_capacity(2 * (self.len() + other.len()));
        joined.extend_from_slice(self.as_bytes());
        joined.extend_from_slice(other.as_bytes());
        ByteChunk::new(joined)
    }
}

impl PartialEq for ByteChunk {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteChunk {}

impl fmt::Debug for ByteChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.as_bytes().escape_ascii())
    }
}

impl AsRef<[u8]> for ByteChunk {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for ByteChunk {
    fn from(data: &[u8]) -> Self {
        ByteChunk::new(data)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteChunk {
    fn from(data: &[u8; N]) -> Self {
        ByteChunk::new(&data[..])
    }
}

impl From<Vec<u8>> for ByteChunk {
    fn from(data: Vec<u8>) -> Self {
        ByteChunk::new(data)
    }
}

use crate::chunk::Chunk;
use std::fmt;
use std::sync::Arc;

/// A chunk of text whose elements are `char`s
///
/// Positions are byte offsets into the UTF-8 text and always sit on
/// character boundaries; element counts are in characters. Storage is
/// shared between clones and grows in place the way
/// [`ByteChunk`](crate::ByteChunk) storage does.
#[derive(Clone)]
pub struct TextChunk {
    text: Arc<String>,
    start: usize,
    end: usize,
}

impl TextChunk {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        TextChunk {
            text: Arc::new(text),
            start: 0,
            end,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text[self.start..self.end]
    }

    /// The text after byte offset `offset`
    fn rest(&self, offset: usize) -> &str {
        let text = self.as_str();
        assert!(
            text.is_char_boundary(offset),
            "offset {offset} is not a character boundary of text chunk {text:?}"
        );
        &text[offset..]
    }

    fn window(&self, from: usize, to: usize) -> Self {
        TextChunk {
            text: Arc::clone(&self.text),
            start: self.start + from,
            end: self.start + to,
        }
    }
}

impl Chunk for TextChunk {
    type Element = char;

    fn empty() -> Self {
        TextChunk::new(String::new())
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    fn unchecked_head(&self) -> char {
        match self.as_str().chars().next() {
            Some(ch) => ch,
            None => panic!("unchecked_head on an empty text chunk"),
        }
    }

    fn unchecked_tail(&self) -> Self {
        let width = self.unchecked_head().len_utf8();
        self.window(width, self.width())
    }

    fn length_at_least(&self, offset: usize, n: usize) -> bool {
        let Some(bytes) = self.width().checked_sub(offset) else {
            return false;
        };
        // A char takes between one and four bytes.
        if bytes < n {
            false
        } else if bytes >= n.saturating_mul(4) {
            true
        } else {
            self.rest(offset).chars().take(n).count() == n
        }
    }

    fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    fn width(&self) -> usize {
        self.end - self.start
    }

    fn to_char(element: char) -> char {
        element
    }

    fn substring(&self, offset: usize, n: usize) -> Self {
        let rest = self.rest(offset);
        let size = match rest.char_indices().nth(n) {
            Some((size, _)) => size,
            None => {
                assert!(
                    rest.chars().count() == n,
                    "{n} characters requested at offset {offset} of text chunk {:?}",
                    self.as_str()
                );
                rest.len()
            }
        };
        self.window(offset, offset + size)
    }

    fn unchecked_drop(&self, offset: usize) -> Self {
        self.rest(offset);
        self.window(offset, self.width())
    }

    fn append(mut self, other: &Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other.clone();
        }
        if let Some(text) = Arc::get_mut(&mut self.text) {
            text.truncate(self.end);
            text.push_str(other.as_str());
            self.end = text.len();
            return self;
        }
        let mut joined = String::with_capacity(2 * (self.width() + other.width()));
        joined.push_str(self.as_str());
        joined.push_str(other.as_str());
        TextChunk::new(joined)
    }
}

impl PartialEq for TextChunk {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for TextChunk {}

impl fmt::Debug for TextChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for TextChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for TextChunk {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for TextChunk {
    fn from(text: &str) -> Self {
        TextChunk::new(text)
    }
}

impl From<String> for TextChunk {
    fn from(text: String) -> Self {
        TextChunk::new(text)
    }
}

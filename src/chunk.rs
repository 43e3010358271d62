use std::fmt;

/// Buffer representation the engine runs over
///
/// A chunk is a window onto a sequence of elements (bytes, characters, ...).
/// Parsers never look at the representation directly; they only use the
/// operations below, which lets the same combinators run over byte buffers
/// and text buffers alike.
///
/// Offsets into a chunk are in *position units*, the representation's own
/// storage units: bytes for both [`ByteChunk`](crate::ByteChunk) and
/// [`TextChunk`](crate::TextChunk). Counts (`n`, [`Chunk::len`]) are in elements.
/// [`Chunk::width`] converts a chunk to the position units it spans, which
/// is how far a position advances to step over it.
///
/// Cloning a chunk must be cheap: the engine hands the buffer from one
/// continuation to the next by value.
///
/// The `unchecked_*` operations, `substring` and `unchecked_drop` have
/// preconditions that the calling primitive is responsible for. Violating
/// them is a bug in that primitive and panics.
pub trait Chunk: Clone + fmt::Debug + 'static {
    /// The type of elements this chunk holds
    type Element: Copy + PartialEq + fmt::Debug + 'static;

    /// The empty chunk, identity for [`Chunk::append`]
    fn empty() -> Self;

    /// Whether the chunk holds no elements
    fn is_empty(&self) -> bool;

    /// First element. Requires a non-empty chunk.
    fn unchecked_head(&self) -> Self::Element;

    /// Everything but the first element. Requires a non-empty chunk.
    fn unchecked_tail(&self) -> Self;

    /// Whether at least `n` elements follow the position `offset`
    ///
    /// Exact, and false for offsets past the end. Costs at most O(n), however
    /// large `offset` is.
    fn length_at_least(&self, offset: usize, n: usize) -> bool;

    /// Number of logical elements
    fn len(&self) -> usize;

    /// Number of position units the chunk spans
    fn width(&self) -> usize;

    /// Project an element to a character, for diagnostics only
    fn to_char(element: Self::Element) -> char;

    /// The `n` elements following the position `offset`
    ///
    /// Requires `length_at_least(offset, n)` and an offset on an element boundary.
    fn substring(&self, offset: usize, n: usize) -> Self;

    /// Everything after the position `offset`. Requires `offset <= width()`.
    fn unchecked_drop(&self, offset: usize) -> Self;

    /// Concatenate two chunks
    ///
    /// Associative, with [`Chunk::empty`] as identity on both sides. Takes
    /// `self` by value so that a chunk owning the only view of its storage
    /// can grow it in place.
    fn append(self, other: &Self) -> Self;
}

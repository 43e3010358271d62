pub mod bytes;
pub mod text;

pub use bytes::ByteChunk;
pub use text::TextChunk;

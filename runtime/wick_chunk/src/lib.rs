//! Wick Chunk - Chunk addressing for the Wick value core.
//!
//! Script code names parts of a value as `word 3 to 5 of x`, `line 2 of x`
//! or `item 4 of x`. This crate divides a sequence into those chunks and
//! reads or rewrites them:
//!
//! - `ChunkKind` and `Delimiters` say how a sequence is divided
//! - `Segmenter` computes chunk count and boundaries
//! - `ChunkSpec`, `Ordinal` and `Preposition` describe an addressed write
//! - `text` wraps the generic operations for `&str`
//!
//! Everything is generic over `Unit`, so the same rules apply to text
//! (`char`) and binary data (`u8`).

mod edit;
mod kind;
mod segment;
mod spec;
pub mod text;
mod unit;

pub use edit::{delete, extract, splice};
pub use kind::{ChunkKind, Delimiters, UnknownChunkKind};
pub use segment::Segmenter;
pub use spec::{ChunkSpec, Ordinal, Preposition};
pub use unit::Unit;

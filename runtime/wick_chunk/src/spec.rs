//! Chunk descriptors: which kind, which ordinal, optionally a range end.

use std::fmt;

use crate::kind::ChunkKind;

/// A position among the chunks of a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ordinal {
    /// 1-based index. Zero and negatives clamp to the start.
    Nth(i64),
    Last,
    /// `count / 2 + 1`.
    Middle,
}

impl Ordinal {
    /// The index this ordinal names among `count` chunks.
    pub fn resolve(self, count: usize) -> i64 {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        match self {
            Ordinal::Nth(n) => n,
            Ordinal::Last => count,
            Ordinal::Middle => count / 2 + 1,
        }
    }
}

impl From<i64> for Ordinal {
    fn from(n: i64) -> Self {
        Ordinal::Nth(n)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ordinal::Nth(n) => write!(f, "{n}"),
            Ordinal::Last => f.write_str("last"),
            Ordinal::Middle => f.write_str("middle"),
        }
    }
}

/// Where a write lands relative to the addressed chunk.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Preposition {
    /// Replace the chunk.
    #[default]
    Into,
    /// Insert ahead of the chunk's content.
    Before,
    /// Insert after the chunk's content.
    After,
}

/// `kind first [to last]`, e.g. `word 3 to 5`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChunkSpec {
    pub kind: ChunkKind,
    pub first: Ordinal,
    pub last: Option<Ordinal>,
}

impl ChunkSpec {
    pub fn nth(kind: ChunkKind, n: i64) -> Self {
        ChunkSpec {
            kind,
            first: Ordinal::Nth(n),
            last: None,
        }
    }

    pub fn range(kind: ChunkKind, first: i64, last: i64) -> Self {
        ChunkSpec {
            kind,
            first: Ordinal::Nth(first),
            last: Some(Ordinal::Nth(last)),
        }
    }

    pub fn at(kind: ChunkKind, ordinal: Ordinal) -> Self {
        ChunkSpec {
            kind,
            first: ordinal,
            last: None,
        }
    }

    #[must_use]
    pub fn to(mut self, last: Ordinal) -> Self {
        self.last = Some(last);
        self
    }

    /// First and last indices among `count` chunks. A missing range end
    /// means a single chunk.
    pub fn bounds(&self, count: usize) -> (i64, i64) {
        let first = self.first.resolve(count);
        let last = self.last.map_or(first, |last| last.resolve(count));
        (first, last)
    }
}

impl fmt::Display for ChunkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.first)?;
        if let Some(last) = self.last {
            write!(f, " to {last}")?;
        }
        Ok(())
    }
}

//! Chunk kinds and the delimiters that drive the delimited ones.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How a sequence is divided into addressable chunks.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    Character,
    Word,
    Sentence,
    Paragraph,
    Line,
    Item,
    Column,
    Row,
}

impl ChunkKind {
    pub const ALL: [ChunkKind; 8] = [
        ChunkKind::Character,
        ChunkKind::Word,
        ChunkKind::Sentence,
        ChunkKind::Paragraph,
        ChunkKind::Line,
        ChunkKind::Item,
        ChunkKind::Column,
        ChunkKind::Row,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChunkKind::Character => "character",
            ChunkKind::Word => "word",
            ChunkKind::Sentence => "sentence",
            ChunkKind::Paragraph => "paragraph",
            ChunkKind::Line => "line",
            ChunkKind::Item => "item",
            ChunkKind::Column => "column",
            ChunkKind::Row => "row",
        }
    }

    /// Item, column and row split on a single configurable delimiter.
    pub fn is_delimited(self) -> bool {
        matches!(self, ChunkKind::Item | ChunkKind::Column | ChunkKind::Row)
    }

    /// Kinds whose chunks are separated by exactly one separator, so a
    /// write past the last chunk can be padded with empty chunks.
    pub fn pads_when_extended(self) -> bool {
        self.is_delimited() || self == ChunkKind::Line
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for an unrecognized chunk kind name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown chunk kind '{0}'")]
pub struct UnknownChunkKind(pub String);

impl FromStr for ChunkKind {
    type Err = UnknownChunkKind;

    /// Accepts singular, plural and the short `char` forms, in any case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lower = name.trim().to_ascii_lowercase();
        let singular = lower.strip_suffix('s').unwrap_or(&lower);
        match singular {
            "char" | "character" => Ok(ChunkKind::Character),
            "word" => Ok(ChunkKind::Word),
            "sentence" => Ok(ChunkKind::Sentence),
            "paragraph" => Ok(ChunkKind::Paragraph),
            "line" => Ok(ChunkKind::Line),
            "item" => Ok(ChunkKind::Item),
            "column" => Ok(ChunkKind::Column),
            "row" => Ok(ChunkKind::Row),
            _ => Err(UnknownChunkKind(name.to_string())),
        }
    }
}

/// Separator characters for the delimited chunk kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Delimiters {
    pub item: char,
    pub column: char,
    pub row: char,
}

impl Delimiters {
    #[must_use]
    pub fn with_item(mut self, item: char) -> Self {
        self.item = item;
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: char) -> Self {
        self.column = column;
        self
    }

    #[must_use]
    pub fn with_row(mut self, row: char) -> Self {
        self.row = row;
        self
    }

    /// The delimiter for a delimited kind; `None` for every other kind.
    pub fn for_kind(&self, kind: ChunkKind) -> Option<char> {
        match kind {
            ChunkKind::Item => Some(self.item),
            ChunkKind::Column => Some(self.column),
            ChunkKind::Row => Some(self.row),
            _ => None,
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters {
            item: ',',
            column: '\t',
            row: '\n',
        }
    }
}

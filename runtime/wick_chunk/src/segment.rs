//! Chunk boundaries over a sequence.
//!
//! A `Segmenter` computes the content span of every chunk once and answers
//! `count`, `start` and `end` from it. Indices are 1-based and clamp:
//! anything at or below zero maps to offset 0 and anything past the last
//! chunk maps to the sequence length.
//!
//! `end(n)` is `start(n + 1)` for every chunk but the last, so it includes
//! the separator that follows chunk `n`. `span(n)` is the content alone.

use std::ops::Range;

use crate::kind::{ChunkKind, Delimiters};
use crate::unit::{line_break_len, Unit};

/// Chunk layout of one sequence for one kind.
#[derive(Clone, Debug)]
pub struct Segmenter<'a, U> {
    units: &'a [U],
    kind: ChunkKind,
    layout: Layout,
    /// Unit written between chunks when padding past the end.
    separator: Option<U>,
}

#[derive(Clone, Debug)]
enum Layout {
    /// Character chunks map 1:1 onto units.
    Units,
    Spans(Vec<Range<usize>>),
}

impl<'a, U: Unit> Segmenter<'a, U> {
    pub fn new(units: &'a [U], kind: ChunkKind, delimiters: &Delimiters) -> Self {
        let mut separator = None;
        let layout = match kind {
            ChunkKind::Character => Layout::Units,
            ChunkKind::Word => Layout::Spans(word_spans(units)),
            ChunkKind::Sentence => Layout::Spans(sentence_spans(units)),
            ChunkKind::Paragraph => Layout::Spans(paragraph_spans(units)),
            ChunkKind::Line => {
                separator = U::from_char('\n');
                Layout::Spans(line_spans(units))
            }
            ChunkKind::Item | ChunkKind::Column | ChunkKind::Row => {
                separator = delimiters.for_kind(kind).and_then(U::from_char);
                Layout::Spans(delimited_spans(units, separator))
            }
        };
        Segmenter {
            units,
            kind,
            layout,
            separator,
        }
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    pub fn units(&self) -> &'a [U] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Number of chunks.
    pub fn count(&self) -> usize {
        match &self.layout {
            Layout::Units => self.units.len(),
            Layout::Spans(spans) => spans.len(),
        }
    }

    /// Content span of the 1-based chunk `n`, or `None` when out of range.
    fn content(&self, n: i64) -> Option<Range<usize>> {
        let index = usize::try_from(n).ok()?.checked_sub(1)?;
        match &self.layout {
            Layout::Units => (index < self.units.len()).then(|| index..index + 1),
            Layout::Spans(spans) => spans.get(index).cloned(),
        }
    }

    fn past_end(&self, n: i64) -> bool {
        usize::try_from(n).is_ok_and(|n| n > self.count())
    }

    /// Offset where chunk `n` starts.
    pub fn start(&self, n: i64) -> usize {
        match self.content(n) {
            Some(span) => span.start,
            None if self.past_end(n) => self.units.len(),
            None => 0,
        }
    }

    /// Offset where chunk `n` ends: the start of the next chunk, or the
    /// content end for the last one.
    pub fn end(&self, n: i64) -> usize {
        match self.content(n) {
            Some(span) if self.count() == usize::try_from(n).unwrap_or(0) => span.end,
            Some(_) => self.start(n.saturating_add(1)),
            None if self.past_end(n) => self.units.len(),
            None => 0,
        }
    }

    /// Content of chunk `n` without separators. Out-of-range indices give
    /// an empty span at the clamped boundary.
    pub fn span(&self, n: i64) -> Range<usize> {
        self.content(n).unwrap_or_else(|| {
            let at = self.start(n);
            at..at
        })
    }

    /// The units of chunk `n`.
    pub fn get(&self, n: i64) -> &'a [U] {
        &self.units[self.span(n)]
    }

    /// Every chunk's content, in order.
    pub fn segments(&self) -> impl Iterator<Item = &'a [U]> + '_ {
        let units = self.units;
        (1..=self.count()).map(move |n| {
            let n = i64::try_from(n).unwrap_or(i64::MAX);
            &units[self.span(n)]
        })
    }

    pub(crate) fn separator(&self) -> Option<U> {
        self.separator
    }

    /// `true` when the sequence ends with this kind's separator, leaving
    /// the last chunk closed.
    pub(crate) fn ends_with_separator(&self) -> bool {
        let Some(&last) = self.units.last() else {
            return false;
        };
        match self.kind {
            ChunkKind::Line => last.is_line_break(),
            _ => self.separator == Some(last),
        }
    }
}

fn word_spans<U: Unit>(units: &[U]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut at = 0;
    while at < units.len() {
        if units[at].is_blank() {
            at += 1;
            continue;
        }
        let start = at;
        while at < units.len() && !units[at].is_blank() {
            at += 1;
        }
        spans.push(start..at);
    }
    spans
}

fn sentence_spans<U: Unit>(units: &[U]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut at = 0;
    while at < units.len() {
        if units[at].is_blank() {
            at += 1;
            continue;
        }
        let start = at;
        let mut end = units.len();
        while at < units.len() {
            let closes = units[at].is_sentence_end()
                && units.get(at + 1).map_or(true, |next| next.is_blank());
            at += 1;
            if closes {
                end = at;
                break;
            }
        }
        while end > start && units[end - 1].is_blank() {
            end -= 1;
        }
        spans.push(start..end);
    }
    spans
}

fn paragraph_spans<U: Unit>(units: &[U]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut at = 0;
    while at < units.len() {
        if units[at].is_line_break() {
            at += 1;
            continue;
        }
        let start = at;
        while at < units.len() && !units[at].is_line_break() {
            at += 1;
        }
        spans.push(start..at);
    }
    spans
}

fn line_spans<U: Unit>(units: &[U]) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = 0;
    let mut at = 0;
    while at < units.len() {
        let terminator = line_break_len(units, at);
        if terminator == 0 {
            at += 1;
            continue;
        }
        spans.push(start..at);
        at += terminator;
        start = at;
    }
    if start < units.len() {
        spans.push(start..units.len());
    }
    spans
}

/// Split on `delimiter`. A trailing delimiter closes the last chunk rather
/// than opening an empty one. Without a usable delimiter the whole sequence
/// is one chunk.
fn delimited_spans<U: Unit>(units: &[U], delimiter: Option<U>) -> Vec<Range<usize>> {
    if units.is_empty() {
        return Vec::new();
    }
    let Some(delimiter) = delimiter else {
        return vec![0..units.len()];
    };
    let mut spans = Vec::new();
    let mut start = 0;
    for (at, unit) in units.iter().enumerate() {
        if *unit == delimiter {
            spans.push(start..at);
            start = at + 1;
        }
    }
    if start < units.len() {
        spans.push(start..units.len());
    }
    spans
}

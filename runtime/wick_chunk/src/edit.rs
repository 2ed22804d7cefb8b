//! Reading and rewriting the chunks a `ChunkSpec` addresses.

use std::ops::Range;

use crate::kind::Delimiters;
use crate::segment::Segmenter;
use crate::spec::{ChunkSpec, Preposition};
use crate::unit::Unit;

/// 1-based bounds clamped below to the first chunk.
fn clamped_bounds(spec: &ChunkSpec, count: usize) -> (usize, usize) {
    let (first, last) = spec.bounds(count);
    let first = usize::try_from(first.max(1)).unwrap_or(usize::MAX);
    let last = usize::try_from(last).unwrap_or(0);
    (first, last)
}

fn index(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl<'a, U: Unit> Segmenter<'a, U> {
    /// Unit range covered by `spec`: from the first chunk's content start
    /// to the last chunk's content end. Addresses past the end yield an
    /// empty range at the sequence end.
    pub fn range(&self, spec: &ChunkSpec) -> Range<usize> {
        let count = self.count();
        let (first, last) = clamped_bounds(spec, count);
        if first > count {
            return self.len()..self.len();
        }
        let start = self.span(index(first)).start;
        if last < first {
            return start..start;
        }
        start..self.span(index(last.min(count))).end
    }

    /// The units `spec` addresses.
    pub fn extract(&self, spec: &ChunkSpec) -> &'a [U] {
        &self.units()[self.range(spec)]
    }

    /// Write `replacement` into, before or after the addressed chunks.
    ///
    /// Writing past the last line, item, column or row first pads with
    /// empty chunks so the replacement lands at the requested index. Other
    /// kinds append.
    pub fn splice(&self, spec: &ChunkSpec, preposition: Preposition, replacement: &[U]) -> Vec<U> {
        let units = self.units();
        let count = self.count();
        let (first, _) = clamped_bounds(spec, count);

        let mut out = Vec::with_capacity(units.len() + replacement.len());
        if first > count {
            out.extend_from_slice(units);
            if let Some(separator) = self.separator().filter(|_| self.kind().pads_when_extended()) {
                let open = usize::from(!units.is_empty() && !self.ends_with_separator());
                let padding = (first - count - 1) + open;
                out.extend(std::iter::repeat(separator).take(padding));
            }
            out.extend_from_slice(replacement);
            return out;
        }

        let range = self.range(spec);
        let (cut_start, cut_end) = match preposition {
            Preposition::Into => (range.start, range.end),
            Preposition::Before => (range.start, range.start),
            Preposition::After => (range.end, range.end),
        };
        out.extend_from_slice(&units[..cut_start]);
        out.extend_from_slice(replacement);
        out.extend_from_slice(&units[cut_end..]);
        out
    }

    /// Remove the addressed chunks together with one adjoining separator:
    /// the following one, or the preceding one when the last chunk goes.
    pub fn delete(&self, spec: &ChunkSpec) -> Vec<U> {
        let units = self.units();
        let count = self.count();
        let (first, last) = clamped_bounds(spec, count);
        if first > count || last < first {
            return units.to_vec();
        }
        let last = last.min(count);

        let cut = if last < count {
            self.span(index(first)).start..self.start(index(last + 1))
        } else if first > 1 {
            self.span(index(first - 1)).end..self.span(index(last)).end
        } else {
            self.span(index(first)).start..self.span(index(last)).end
        };
        let mut out = Vec::with_capacity(units.len() - cut.len());
        out.extend_from_slice(&units[..cut.start]);
        out.extend_from_slice(&units[cut.end..]);
        out
    }
}

/// Range of `spec` within `units`.
pub fn extract<U: Unit>(units: &[U], spec: &ChunkSpec, delimiters: &Delimiters) -> Range<usize> {
    Segmenter::new(units, spec.kind, delimiters).range(spec)
}

/// `units` with `replacement` written at `spec`.
pub fn splice<U: Unit>(
    units: &[U],
    spec: &ChunkSpec,
    preposition: Preposition,
    replacement: &[U],
    delimiters: &Delimiters,
) -> Vec<U> {
    Segmenter::new(units, spec.kind, delimiters).splice(spec, preposition, replacement)
}

/// `units` without the chunks at `spec`.
pub fn delete<U: Unit>(units: &[U], spec: &ChunkSpec, delimiters: &Delimiters) -> Vec<U> {
    Segmenter::new(units, spec.kind, delimiters).delete(spec)
}

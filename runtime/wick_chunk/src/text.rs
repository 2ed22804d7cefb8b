//! `&str` conveniences over the generic chunk operations. Offsets are in
//! characters, not bytes.

use crate::edit;
use crate::kind::{ChunkKind, Delimiters};
use crate::segment::Segmenter;
use crate::spec::{ChunkSpec, Preposition};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Number of `kind` chunks in `text`.
pub fn count(text: &str, kind: ChunkKind, delimiters: &Delimiters) -> usize {
    match kind {
        ChunkKind::Character => text.chars().count(),
        _ => Segmenter::new(&chars(text), kind, delimiters).count(),
    }
}

/// The text `spec` addresses.
pub fn get(text: &str, spec: &ChunkSpec, delimiters: &Delimiters) -> String {
    let units = chars(text);
    let range = edit::extract(&units, spec, delimiters);
    units[range].iter().collect()
}

/// `text` with `replacement` written at `spec`.
pub fn put(
    text: &str,
    spec: &ChunkSpec,
    preposition: Preposition,
    replacement: &str,
    delimiters: &Delimiters,
) -> String {
    edit::splice(&chars(text), spec, preposition, &chars(replacement), delimiters)
        .into_iter()
        .collect()
}

/// `text` without the chunks at `spec`.
pub fn delete(text: &str, spec: &ChunkSpec, delimiters: &Delimiters) -> String {
    edit::delete(&chars(text), spec, delimiters)
        .into_iter()
        .collect()
}

/// Every `kind` chunk of `text`, in order.
pub fn split(text: &str, kind: ChunkKind, delimiters: &Delimiters) -> Vec<String> {
    let units = chars(text);
    Segmenter::new(&units, kind, delimiters)
        .segments()
        .map(|chunk| chunk.iter().collect())
        .collect()
}

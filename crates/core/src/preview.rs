//! Preview orchestration.
//!
//! [`Preview`] is the stateful seam between the pure algorithms and a presentation layer. It
//! owns one original source, the generated text, and the decoded mapping list, and it caches
//! the segmenter output keyed by an explicit identity token: the source *name*.
//!
//! Recomputation contract:
//!
//! - Fragment lines are recomputed only when [`Preview::set_source`] sees a different name, or
//!   on an explicit [`Preview::refresh`]. Swapping mappings or generated text alone does not
//!   re-segment; callers wanting that must call `refresh`.
//! - Snippets are recomputed on every [`Preview::snippet`] call. Hover and selection state is
//!   caller-owned and re-supplied per call; nothing is stored here.

use crate::{
    Mapping,
    decode::{DecodedMap, SourceFile},
    segment::{Fragment, segment},
    snippet::{Snippet, extract_snippet},
};

/// One source file aligned against one generated text, with cached segmentation.
#[derive(Debug, Clone)]
pub struct Preview {
    source: SourceFile,
    generated: String,
    mappings: Vec<Mapping>,
    lines: Vec<Vec<Fragment>>,
}

impl Preview {
    /// Build a preview, segmenting `source` immediately.
    pub fn new(source: SourceFile, generated: String, mappings: Vec<Mapping>) -> Self {
        let lines = segment(&source.content, &mappings);
        Self {
            source,
            generated,
            mappings,
            lines,
        }
    }

    /// Build a preview for one source of a decoded map, using its embedded contents.
    pub fn from_decoded(
        decoded: &DecodedMap,
        source_index: u32,
        generated: String,
    ) -> Result<Self, crate::PreviewError> {
        let source = decoded.source(source_index)?;
        let mappings = decoded.mappings_for_source(source_index);
        Ok(Self::new(source, generated, mappings))
    }

    pub fn source(&self) -> &SourceFile {
        &self.source
    }

    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// The cached per-line fragment lists, in original-line order.
    pub fn lines(&self) -> &[Vec<Fragment>] {
        &self.lines
    }

    /// Replace the source, re-segmenting only when its name (the identity token) changed.
    ///
    /// A same-named source with different contents keeps the cached fragments; that staleness
    /// is part of the contract and is what `refresh` is for.
    pub fn set_source(&mut self, source: SourceFile) {
        let changed = source.name != self.source.name;
        self.source = source;
        if changed {
            self.refresh();
        }
    }

    /// Replace the mapping list without re-segmenting.
    pub fn set_mappings(&mut self, mappings: Vec<Mapping>) {
        self.mappings = mappings;
    }

    /// Replace the generated text. Snippets pick this up on their next extraction.
    pub fn set_generated(&mut self, generated: String) {
        self.generated = generated;
    }

    /// Recompute the fragment lines from the current source and mappings.
    pub fn refresh(&mut self) {
        self.lines = segment(&self.source.content, &self.mappings);
    }

    /// Extract the snippet for the given selection, if any.
    ///
    /// Forwarded straight to [`extract_snippet`]; the result joins the line list via
    /// [`Snippet::line`].
    pub fn snippet(&self, selected: Option<usize>) -> Option<Snippet> {
        extract_snippet(&self.generated, &self.mappings, selected)
    }
}

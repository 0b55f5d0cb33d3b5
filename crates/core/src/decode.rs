//! Sourcemap decoding.
//!
//! The segmenter and extractor consume plain ordered [`Mapping`] lists and never see the
//! sourcemap wire format. This module is the collaborator that produces those lists: it wraps
//! a parsed [`sourcemap::SourceMap`] and exposes its sources, their embedded contents, and a
//! per-source mapping list ordered by generated position.
//!
//! Notes:
//!
//! - Tokens without an original position (the `u32::MAX`/no-source convention) carry nothing
//!   the preview can align, so they are dropped.
//! - The collected list is stably sorted by generated position; token storage order is not
//!   relied upon.

use crate::{Mapping, PreviewError};

/// An original source: an identity name plus its full contents.
///
/// The name is the identity key presentation layers use for change detection; the contents are
/// what the segmenter walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// A parsed sourcemap ready to hand mapping lists to the preview core.
pub struct DecodedMap {
    map: sourcemap::SourceMap,
}

impl DecodedMap {
    /// Parse sourcemap JSON.
    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        let map = sourcemap::SourceMap::from_slice(json.as_bytes())?;
        Ok(Self { map })
    }

    /// Number of sources referenced by the map.
    pub fn source_count(&self) -> u32 {
        self.map.get_source_count()
    }

    /// Name of the source at `index`, if it exists.
    pub fn source_name(&self, index: u32) -> Option<&str> {
        self.map.get_source(index)
    }

    /// The source at `index` with its embedded contents.
    ///
    /// Errors when the index is out of range or the map does not embed contents for that
    /// source (callers holding the source text elsewhere should pair [`Self::source_name`]
    /// with their own contents instead).
    pub fn source(&self, index: u32) -> Result<SourceFile, PreviewError> {
        let name = self
            .map
            .get_source(index)
            .ok_or(PreviewError::UnknownSource(index))?;
        let content = self
            .map
            .get_source_contents(index)
            .ok_or_else(|| PreviewError::MissingSourceContents(name.to_string()))?;
        Ok(SourceFile {
            name: name.to_string(),
            content: content.to_string(),
        })
    }

    /// The ordered mapping list for the source at `index`.
    ///
    /// Tokens belonging to other sources or without an original position are dropped. The
    /// result is stably sorted by generated position, satisfying the ordering invariant the
    /// segmenter and extractor assume.
    pub fn mappings_for_source(&self, index: u32) -> Vec<Mapping> {
        let mut mappings: Vec<Mapping> = self
            .map
            .tokens()
            .filter(|t| t.get_src_id() == index && t.get_src_line() != u32::MAX)
            .map(|t| Mapping {
                original_line: t.get_src_line(),
                original_column: t.get_src_col(),
                generated_line: t.get_dst_line(),
                generated_column: t.get_dst_col(),
            })
            .collect();
        mappings.sort_by_key(|m| m.generated_pos());
        mappings
    }
}

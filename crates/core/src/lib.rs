//! Sourcemap preview library (with WASM bindings).
//!
//! This crate reconstructs a character-accurate alignment between an original source text and
//! the generated (transpiled/minified) text it was compiled into, driven by an ordered list of
//! decoded sourcemap mappings, and supports interactive lookup in both directions.
//!
//! Entry points:
//!
//! - [`segment`] walks the original text and splits every line into mapped/unmapped fragments.
//! - [`snippet`] extracts a bounded-context snippet of generated text for a selected mapping.
//! - [`preview`] ties both together behind an identity-keyed cache for presentation layers.
//!
//! Internals:
//!
//! - [`mapping`] holds the decoded mapping record and its position comparisons.
//! - [`decode`] adapts sourcemap JSON into ordered mapping lists via the `sourcemap` crate.

pub mod decode;
pub mod mapping;
pub mod preview;
pub mod segment;
pub mod snippet;

pub use decode::{DecodedMap, SourceFile};
pub use mapping::Mapping;
pub use preview::Preview;
pub use segment::{Fragment, MappingRef, segment};
pub use snippet::{CONTEXT_CHARS, EMPTY_SPAN_PLACEHOLDER, Snippet, extract_snippet};

/// Errors that can occur while decoding a sourcemap.
///
/// The segmenter and extractor themselves never fail; degraded inputs produce fallback values
/// instead (empty fragments, `None` snippets).
#[derive(thiserror::Error, Debug)]
pub enum PreviewError {
    #[error("invalid sourcemap: {0}")]
    SourceMap(#[from] sourcemap::Error),

    #[error("source index {0} out of range")]
    UnknownSource(u32),

    #[error("source {0:?} has no embedded contents")]
    MissingSourceContents(String),
}

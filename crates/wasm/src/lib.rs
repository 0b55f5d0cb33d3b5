//! wasm-bindgen exports.
//!
//! This module exposes the sourcemap preview core to JavaScript via `wasm-bindgen`. The
//! underlying logic lives in `map-preview`; everything here is serde/tsify plumbing.

use wasm_bindgen::prelude::*;

use map_preview::{
    DecodedMap, Fragment as FragmentInner, Mapping as MappingInner, Snippet as SnippetInner,
    extract_snippet, segment,
};

/// A decoded mapping, positions zero-based.
#[derive(Debug, Clone, Copy, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct Mapping {
    pub original_line: u32,
    pub original_column: u32,
    pub generated_line: u32,
    pub generated_column: u32,
}

impl From<MappingInner> for Mapping {
    fn from(m: MappingInner) -> Self {
        Self {
            original_line: m.original_line,
            original_column: m.original_column,
            generated_line: m.generated_line,
            generated_column: m.generated_column,
        }
    }
}

/// One source entry of a decoded map.
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
pub struct SourceEntry {
    /// Source filename as recorded in the map.
    pub name: String,
    /// Whether the map embeds the source contents.
    pub has_contents: bool,
}

/// The source list of a decoded map.
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct SourceList {
    pub sources: Vec<SourceEntry>,
}

/// The ordered mapping list for one source.
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct MappingList {
    pub mappings: Vec<Mapping>,
}

/// One fragment of a segmented source line.
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
pub struct Fragment {
    /// The literal characters of the fragment.
    pub value: String,
    /// Index into the mapping list, present iff the fragment is mapped.
    pub mapping_index: Option<u32>,
}

impl From<&FragmentInner> for Fragment {
    fn from(f: &FragmentInner) -> Self {
        Self {
            value: f.value.clone(),
            mapping_index: f.mapping.map(|m| m.index as u32),
        }
    }
}

/// Per-line fragment lists for one source.
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct FragmentLines {
    pub lines: Vec<Vec<Fragment>>,
}

/// A windowed generated-text snippet for a selected mapping.
#[derive(Debug, Clone, serde::Serialize, tsify::Tsify)]
#[tsify(into_wasm_abi)]
pub struct Snippet {
    /// Original line the snippet joins under.
    pub line: u32,
    /// Up to 20 characters of leading context.
    pub prefix: String,
    /// The exact mapped span; empty when nothing matched (presentation substitutes a marker).
    pub span: String,
    /// Up to 20 characters of trailing context.
    pub suffix: String,
}

impl From<SnippetInner> for Snippet {
    fn from(s: SnippetInner) -> Self {
        Self {
            line: s.line,
            prefix: s.prefix,
            span: s.span,
            suffix: s.suffix,
        }
    }
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// List the sources referenced by a sourcemap.
#[wasm_bindgen]
pub fn decode_sources(map_json: String) -> Result<SourceList, JsValue> {
    console_error_panic_hook::set_once();

    let decoded = DecodedMap::from_json(&map_json).map_err(js_err)?;
    let sources = (0..decoded.source_count())
        .map(|i| SourceEntry {
            name: decoded.source_name(i).unwrap_or_default().to_string(),
            has_contents: decoded.source(i).is_ok(),
        })
        .collect();
    Ok(SourceList { sources })
}

/// Decode the ordered mapping list for one source of a sourcemap.
#[wasm_bindgen]
pub fn decode_mappings(map_json: String, source_index: u32) -> Result<MappingList, JsValue> {
    console_error_panic_hook::set_once();

    let decoded = DecodedMap::from_json(&map_json).map_err(js_err)?;
    let mappings = decoded
        .mappings_for_source(source_index)
        .into_iter()
        .map(Mapping::from)
        .collect();
    Ok(MappingList { mappings })
}

/// Segment `content` into per-line fragment lists using one source's mappings.
///
/// Fragment `mapping_index` values refer to the list returned by [`decode_mappings`] for the
/// same map and source index.
#[wasm_bindgen]
pub fn segment_source(
    content: String,
    map_json: String,
    source_index: u32,
) -> Result<FragmentLines, JsValue> {
    console_error_panic_hook::set_once();

    let decoded = DecodedMap::from_json(&map_json).map_err(js_err)?;
    let mappings = decoded.mappings_for_source(source_index);
    let lines = segment(&content, &mappings)
        .iter()
        .map(|line| line.iter().map(Fragment::from).collect())
        .collect();
    Ok(FragmentLines { lines })
}

/// Extract the generated-text snippet for a selected mapping index, if any.
///
/// `selected` is the index a hover/select event carries; pass `undefined` for no selection.
#[wasm_bindgen]
pub fn snippet_for_selection(
    generated: String,
    map_json: String,
    source_index: u32,
    selected: Option<u32>,
) -> Result<Option<Snippet>, JsValue> {
    console_error_panic_hook::set_once();

    let decoded = DecodedMap::from_json(&map_json).map_err(js_err)?;
    let mappings = decoded.mappings_for_source(source_index);
    Ok(extract_snippet(&generated, &mappings, selected.map(|i| i as usize)).map(Snippet::from))
}

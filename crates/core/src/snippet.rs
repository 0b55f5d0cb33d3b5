//! Generated-span extraction.
//!
//! Given the generated text and a selected mapping, this module cuts the mapping's generated
//! line into a prefix / span / suffix triple: the exact characters attributed to the mapping,
//! with up to [`CONTEXT_CHARS`] characters of surrounding context on each side.
//!
//! Span model:
//!
//! - The span starts at the selected mapping's generated column.
//! - It ends right after the next mapping's generated column, but only if that next mapping is
//!   on the same generated line; otherwise the span runs to the end of the line. A span never
//!   extends past its own line.
//! - The prefix is trailing-truncated and the suffix leading-truncated; the span itself is
//!   never truncated.
//!
//! An empty span is returned as-is; presentation layers substitute
//! [`EMPTY_SPAN_PLACEHOLDER`] rather than treating it as an error.

use crate::mapping::Mapping;

/// Maximum number of context characters kept on each side of the span.
pub const CONTEXT_CHARS: usize = 20;

/// Placeholder presentation layers show when a selected mapping has no generated span.
///
/// The extractor itself never emits this; it returns an empty `span` and nothing more.
pub const EMPTY_SPAN_PLACEHOLDER: &str = "[NOT FOUND]";

/// A windowed view of the generated text around one mapping's span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    /// The selected mapping's *original* line, used to join the snippet into the segmented
    /// source view.
    pub line: u32,
    /// Up to [`CONTEXT_CHARS`] characters preceding the span on its generated line.
    pub prefix: String,
    /// The exact characters attributed to the selected mapping. May be empty.
    pub span: String,
    /// Up to [`CONTEXT_CHARS`] characters following the span on its generated line.
    pub suffix: String,
}

/// Extract the snippet for the mapping at `selected`, or `None` when nothing is selected.
///
/// Degraded inputs are contained rather than reported: an out-of-range index, or a mapping
/// pointing at a generated line that does not exist, also yield `None`.
pub fn extract_snippet(
    generated: &str,
    mappings: &[Mapping],
    selected: Option<usize>,
) -> Option<Snippet> {
    let index = selected?;
    let m = mappings.get(index)?;
    // The next mapping bounds the span only when it sits on the same generated line.
    let next = mappings
        .get(index + 1)
        .filter(|n| n.generated_line == m.generated_line);

    let line = generated.split('\n').nth(m.generated_line as usize)?;

    let mut prefix = String::new();
    let mut span = String::new();
    let mut suffix = String::new();
    for (column, ch) in line.chars().enumerate() {
        let column = column as u32;
        if column < m.generated_column {
            prefix.push(ch);
        } else if next.is_some_and(|n| column > n.generated_column) {
            suffix.push(ch);
        } else {
            span.push(ch);
        }
    }

    Some(Snippet {
        line: m.original_line,
        prefix: tail_chars(&prefix, CONTEXT_CHARS),
        span,
        suffix: head_chars(&suffix, CONTEXT_CHARS),
    })
}

/// Keep only the last `n` characters of `s`.
fn tail_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    if count <= n {
        s.to_string()
    } else {
        s.chars().skip(count - n).collect()
    }
}

/// Keep only the first `n` characters of `s`.
fn head_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(
        original_line: u32,
        original_column: u32,
        generated_line: u32,
        generated_column: u32,
    ) -> Mapping {
        Mapping {
            original_line,
            original_column,
            generated_line,
            generated_column,
        }
    }

    /// Without a next mapping, the span runs from its column to the end of the line.
    #[test]
    fn span_without_next_mapping_runs_to_line_end() {
        let m = mapping(0, 0, 0, 2);
        let snippet = extract_snippet("xxHELLOyy", &[m], Some(0)).unwrap();
        assert_eq!(snippet.line, 0);
        assert_eq!(snippet.prefix, "xx");
        assert_eq!(snippet.span, "HELLOyy");
        assert_eq!(snippet.suffix, "");
    }

    #[test]
    fn no_selection_yields_none() {
        let m = mapping(0, 0, 0, 0);
        assert_eq!(extract_snippet("abc", &[m], None), None);
    }

    #[test]
    fn out_of_range_selection_yields_none() {
        let m = mapping(0, 0, 0, 0);
        assert_eq!(extract_snippet("abc", &[m], Some(5)), None);
    }

    #[test]
    fn missing_generated_line_yields_none() {
        let m = mapping(0, 0, 7, 0);
        assert_eq!(extract_snippet("only one line", &[m], Some(0)), None);
    }

    /// The next mapping on the same generated line bounds the span; the character at the next
    /// mapping's own column still belongs to the span.
    #[test]
    fn next_mapping_on_same_line_bounds_span_inclusively() {
        let m0 = mapping(3, 0, 0, 2);
        let m1 = mapping(3, 9, 0, 5);
        let snippet = extract_snippet("abCDEFghij", &[m0, m1], Some(0)).unwrap();
        assert_eq!(snippet.line, 3);
        assert_eq!(snippet.prefix, "ab");
        assert_eq!(snippet.span, "CDEF");
        assert_eq!(snippet.suffix, "ghij");
    }

    /// A next mapping on a later generated line is ignored: the span runs to the line end.
    #[test]
    fn next_mapping_on_later_line_is_ignored() {
        let m0 = mapping(0, 0, 0, 2);
        let m1 = mapping(0, 9, 1, 0);
        let snippet = extract_snippet("abCDEF\nnext line", &[m0, m1], Some(0)).unwrap();
        assert_eq!(snippet.prefix, "ab");
        assert_eq!(snippet.span, "CDEF");
        assert_eq!(snippet.suffix, "");
    }

    #[test]
    fn selecting_the_second_mapping_uses_its_own_line() {
        let m0 = mapping(0, 0, 0, 0);
        let m1 = mapping(4, 2, 1, 3);
        let snippet = extract_snippet("first\nabcREST", &[m0, m1], Some(1)).unwrap();
        assert_eq!(snippet.line, 4);
        assert_eq!(snippet.prefix, "abc");
        assert_eq!(snippet.span, "REST");
        assert_eq!(snippet.suffix, "");
    }

    /// Prefix keeps its last 20 characters, suffix its first 20; the span is never truncated.
    #[test]
    fn context_windows_are_bounded_at_20_chars() {
        let long = "p".repeat(50);
        let generated = format!("{long}SPANSPANSPANSPANSPANSPANSPAN{}", "s".repeat(50));
        let m0 = mapping(0, 0, 0, 50);
        let m1 = mapping(0, 9, 0, 77);
        let snippet = extract_snippet(&generated, &[m0, m1], Some(0)).unwrap();
        assert_eq!(snippet.prefix, "p".repeat(20));
        assert_eq!(snippet.span, "SPANSPANSPANSPANSPANSPANSPAN");
        assert_eq!(snippet.suffix, "s".repeat(20));
    }

    /// A mapping column at or past the line end produces an empty span; the placeholder is a
    /// presentation concern, not an extractor output.
    #[test]
    fn column_past_line_end_produces_empty_span() {
        let m = mapping(0, 0, 0, 10);
        let snippet = extract_snippet("short", &[m], Some(0)).unwrap();
        assert_eq!(snippet.prefix, "short");
        assert_eq!(snippet.span, "");
        assert_eq!(snippet.suffix, "");
    }

    /// Context truncation counts characters, not bytes.
    #[test]
    fn truncation_counts_chars_not_bytes() {
        let prefix: String = "é".repeat(30);
        let generated = format!("{prefix}X");
        let m = mapping(0, 0, 0, 30);
        let snippet = extract_snippet(&generated, &[m], Some(0)).unwrap();
        assert_eq!(snippet.prefix, "é".repeat(20));
        assert_eq!(snippet.span, "X");
    }

    #[test]
    fn extraction_is_idempotent() {
        let m0 = mapping(0, 0, 0, 2);
        let m1 = mapping(0, 4, 0, 5);
        let mappings = [m0, m1];
        let generated = "abcdefghij";
        assert_eq!(
            extract_snippet(generated, &mappings, Some(0)),
            extract_snippet(generated, &mappings, Some(0))
        );
    }
}

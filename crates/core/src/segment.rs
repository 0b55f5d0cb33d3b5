//! Original-text segmentation.
//!
//! This module walks the full original source once and splits every line into an ordered list
//! of [`Fragment`]s: maximal character runs that either carry the mapping whose start the walk
//! encountered, or no mapping at all. The output is what a presentation layer renders as
//! highlighted spans, keyed by line number.
//!
//! Mapping model:
//!
//! - A fragment opens exactly where a mapping's original position equals the walk cursor, and
//!   stays open until the next mapping start or line feed.
//! - Mappings whose start the cursor has already consumed are skipped forward, but the walk
//!   never advances past the final mapping: trailing text stays attributed to whichever
//!   fragment was last opened.
//! - An empty mapping list degrades to purely unmapped output.
//!
//! Invariants:
//!
//! - Concatenating fragment values per line reproduces that line exactly (lossless partition).
//! - Two runs over identical inputs produce identical output; nothing is cached here.
//! - The mapping list must be ordered so original positions are non-decreasing along the walk
//!   (sourcemap decode order). Out-of-order lists yield unspecified but panic-free output.

use crate::mapping::Mapping;

/// A maximal run of characters on one original-source line sharing the same mapping status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The literal characters of this run. Never contains a line feed.
    pub value: String,
    /// The mapping this run belongs to, or `None` for plain unmapped text.
    pub mapping: Option<MappingRef>,
}

impl Fragment {
    /// True if this fragment carries a mapping.
    pub fn is_mapped(&self) -> bool {
        self.mapping.is_some()
    }
}

/// A mapping together with its index in the decoded mapping list.
///
/// The index is what interaction events (hover/select) refer to, so it travels with the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingRef {
    /// Position of `mapping` in the list passed to [`segment`].
    pub index: usize,
    /// The mapping record itself.
    pub mapping: Mapping,
}

/// Walk state for one segmentation run.
///
/// The original visualizer threaded a `line`/`column`/`i` cursor triple through a single loop;
/// here the triple is explicit and stepped once per character, which keeps the tie-break order
/// between "open a fragment" and "advance past consumed mappings" visible.
struct Segmenter<'a> {
    mappings: &'a [Mapping],
    /// One fragment list per original line; the last list is the line being walked.
    lines: Vec<Vec<Fragment>>,
    /// Column of the next character on the current line, in Unicode scalar values.
    column: u32,
    /// Index of the next mapping candidate. Monotonically non-decreasing, capped at the last
    /// mapping so trailing text keeps its attribution.
    next: usize,
    /// The fragment currently being accumulated.
    open: Fragment,
}

impl<'a> Segmenter<'a> {
    fn new(mappings: &'a [Mapping]) -> Self {
        Self {
            mappings,
            lines: vec![Vec::new()],
            column: 0,
            next: 0,
            open: Fragment {
                value: String::new(),
                mapping: None,
            },
        }
    }

    /// Close the open fragment onto the current line if it holds any characters.
    fn flush(&mut self) {
        if self.open.value.is_empty() {
            return;
        }
        let closed = std::mem::replace(
            &mut self.open,
            Fragment {
                value: String::new(),
                mapping: None,
            },
        );
        self.lines.last_mut().unwrap().push(closed);
    }

    fn step(&mut self, ch: char) {
        let line = (self.lines.len() - 1) as u32;

        if ch == '\n' {
            // The line feed consumes no column and belongs to no fragment.
            self.flush();
            self.lines.push(Vec::new());
            self.column = 0;
            return;
        }

        if let Some(&m) = self.mappings.get(self.next) {
            if m.starts_at(line, self.column) {
                self.flush();
                self.open.mapping = Some(MappingRef {
                    index: self.next,
                    mapping: m,
                });
            }

            // Skip past mapping starts the cursor has consumed, including one just opened, so
            // the next character sees the next unconsumed candidate. The cap at the final
            // mapping is what leaves trailing text attributed to the last opened fragment.
            while self.next < self.mappings.len() - 1
                && self.mappings[self.next].starts_at_or_before(line, self.column)
            {
                self.next += 1;
            }
        }

        self.open.value.push(ch);
        self.column += 1;
    }

    fn finish(mut self) -> Vec<Vec<Fragment>> {
        self.flush();
        self.lines
    }
}

/// Split `content` into per-line fragment lists driven by `mappings`.
///
/// The outer vector has one entry per line-feed-delimited line of `content` (at least one,
/// possibly empty, even for empty input). Fragments on each line are in text order,
/// non-overlapping, and jointly reproduce the line when concatenated.
///
/// `mappings` must be the decoded mapping list in sourcemap order; fragment
/// [`MappingRef::index`] values index into exactly that list.
pub fn segment(content: &str, mappings: &[Mapping]) -> Vec<Vec<Fragment>> {
    let mut segmenter = Segmenter::new(mappings);
    for ch in content.chars() {
        segmenter.step(ch);
    }
    segmenter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(original_line: u32, original_column: u32) -> Mapping {
        Mapping {
            original_line,
            original_column,
            generated_line: 0,
            generated_column: 0,
        }
    }

    fn unmapped(value: &str) -> Fragment {
        Fragment {
            value: value.to_string(),
            mapping: None,
        }
    }

    fn mapped(value: &str, index: usize, m: Mapping) -> Fragment {
        Fragment {
            value: value.to_string(),
            mapping: Some(MappingRef { index, mapping: m }),
        }
    }

    /// Reassemble the segmented output into the original content.
    fn reassemble(lines: &[Vec<Fragment>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|f| f.value.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// A mapping at the very start tags the first line; the second line stays unmapped.
    #[test]
    fn mapping_at_origin_tags_first_line_only() {
        let m = mapping(0, 0);
        let lines = segment("ab\ncd", &[m]);
        assert_eq!(
            lines,
            vec![vec![mapped("ab", 0, m)], vec![unmapped("cd")]]
        );
    }

    #[test]
    fn empty_mapping_list_yields_unmapped_fragments() {
        let lines = segment("ab\ncd", &[]);
        assert_eq!(lines, vec![vec![unmapped("ab")], vec![unmapped("cd")]]);
    }

    #[test]
    fn empty_content_yields_one_empty_line() {
        let lines = segment("", &[mapping(0, 0)]);
        assert_eq!(lines, vec![Vec::new()]);
    }

    #[test]
    fn trailing_line_feed_yields_trailing_empty_line() {
        let lines = segment("ab\n", &[]);
        assert_eq!(lines, vec![vec![unmapped("ab")], Vec::new()]);
    }

    /// A mapping starting mid-line splits the line at exactly its column.
    #[test]
    fn mapping_mid_line_splits_at_its_column() {
        let m = mapping(0, 6);
        let lines = segment("hello world", &[m]);
        assert_eq!(
            lines,
            vec![vec![unmapped("hello "), mapped("world", 0, m)]]
        );
    }

    #[test]
    fn mapping_on_later_line_opens_there() {
        let m = mapping(1, 0);
        let lines = segment("ab\ncd", &[m]);
        assert_eq!(
            lines,
            vec![vec![unmapped("ab")], vec![mapped("cd", 0, m)]]
        );
    }

    /// Text after the final mapping stays attributed to the last opened fragment.
    #[test]
    fn trailing_text_stays_on_last_opened_fragment() {
        let m0 = mapping(0, 0);
        let m1 = mapping(0, 2);
        let lines = segment("abcdef", &[m0, m1]);
        assert_eq!(
            lines,
            vec![vec![mapped("ab", 0, m0), mapped("cdef", 1, m1)]]
        );
    }

    /// Regression: two mappings at adjacent columns each open their own single-boundary
    /// fragment; the open-then-advance order must not skip the second one.
    #[test]
    fn adjacent_column_mappings_both_open_fragments() {
        let m0 = mapping(0, 1);
        let m1 = mapping(0, 2);
        let lines = segment("abcd", &[m0, m1]);
        assert_eq!(
            lines,
            vec![vec![
                unmapped("a"),
                mapped("b", 0, m0),
                mapped("cd", 1, m1),
            ]]
        );
    }

    /// Regression: for two mappings at the same original position, only the first index ever
    /// tags a fragment; the duplicate is consumed by the advance walk.
    #[test]
    fn duplicate_position_mappings_tag_only_the_first_index() {
        let m0 = mapping(0, 1);
        let m1 = mapping(0, 1);
        let lines = segment("abc", &[m0, m1]);
        assert_eq!(lines, vec![vec![unmapped("a"), mapped("bc", 0, m0)]]);
    }

    /// The exact-position mapping tags exactly one fragment on its line, and no other.
    #[test]
    fn exact_position_mapping_tags_exactly_one_fragment() {
        let m = mapping(2, 5);
        let content = "first\nsecond\nthirdXrest\nlast";
        let lines = segment(content, &[m]);

        let tagged: Vec<(usize, &Fragment)> = lines
            .iter()
            .enumerate()
            .flat_map(|(i, line)| line.iter().map(move |f| (i, f)))
            .filter(|(_, f)| f.is_mapped())
            .collect();
        assert_eq!(tagged.len(), 1);
        let (line_no, fragment) = tagged[0];
        assert_eq!(line_no, 2);
        assert_eq!(fragment.value, "Xrest");
        assert_eq!(fragment.mapping, Some(MappingRef { index: 0, mapping: m }));
    }

    /// Columns count Unicode scalar values, not bytes.
    #[test]
    fn columns_count_chars_not_bytes() {
        let m = mapping(0, 1);
        let lines = segment("αβγ", &[m]);
        assert_eq!(
            lines,
            vec![vec![unmapped("α"), mapped("βγ", 0, m)]]
        );
    }

    /// Round-trip and partition: fragments reproduce the content exactly, with no empty
    /// fragments and one list per line.
    #[test]
    fn segmentation_is_a_lossless_partition() {
        let content = "let x = 1;\nfn main() {\n    print(x)\n}\n";
        let mappings = [
            mapping(0, 0),
            mapping(0, 4),
            mapping(0, 8),
            mapping(1, 0),
            mapping(1, 3),
            mapping(2, 4),
            mapping(3, 0),
        ];
        let lines = segment(content, &mappings);

        assert_eq!(lines.len(), content.split('\n').count());
        assert_eq!(reassemble(&lines), content);
        for (line, expected) in lines.iter().zip(content.split('\n')) {
            let joined: String = line.iter().map(|f| f.value.as_str()).collect();
            assert_eq!(joined, expected);
            assert!(line.iter().all(|f| !f.value.is_empty()));
        }
    }

    /// Two runs over identical inputs are identical.
    #[test]
    fn segmentation_is_deterministic() {
        let content = "ab\ncd ef\n";
        let mappings = [mapping(0, 0), mapping(1, 3)];
        assert_eq!(segment(content, &mappings), segment(content, &mappings));
    }
}

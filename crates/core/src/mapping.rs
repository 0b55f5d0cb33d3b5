//! The decoded mapping record.
//!
//! A [`Mapping`] correlates one position in an original source with one position in the
//! generated output. Mapping sequences handed to this crate are ordered by ascending generated
//! position (line-major, then column); within that ordering, original positions are assumed
//! non-decreasing as far as the segmenter's single forward cursor requires. That invariant is
//! an input contract and is not validated here: out-of-order sequences produce unspecified
//! (but panic-free) output.

/// A single decoded sourcemap mapping.
///
/// All positions are zero-based. Lines are counted in line-feed-delimited lines; columns are
/// counted in Unicode scalar values from the line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mapping {
    /// Line in the original source.
    pub original_line: u32,
    /// Column in the original source.
    pub original_column: u32,
    /// Line in the generated output.
    pub generated_line: u32,
    /// Column in the generated output.
    pub generated_column: u32,
}

impl Mapping {
    /// The `(line, column)` pair on the original side.
    pub fn original_pos(&self) -> (u32, u32) {
        (self.original_line, self.original_column)
    }

    /// The `(line, column)` pair on the generated side.
    pub fn generated_pos(&self) -> (u32, u32) {
        (self.generated_line, self.generated_column)
    }

    /// True if this mapping starts exactly at the given original position.
    pub(crate) fn starts_at(&self, line: u32, column: u32) -> bool {
        self.original_line == line && self.original_column == column
    }

    /// True if this mapping starts at or before the given original position.
    ///
    /// This is the segmenter's advance condition: a mapping whose start the cursor has already
    /// reached (or passed) is considered consumed.
    pub(crate) fn starts_at_or_before(&self, line: u32, column: u32) -> bool {
        self.original_line < line || (self.original_line == line && self.original_column <= column)
    }
}

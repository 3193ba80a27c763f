use serde::{Deserialize, Serialize};
use crate::error::DeckError;

/// Column value meaning "to the end of the line"; the real line length is
/// only known to whoever draws the segment.
pub const UNBOUNDED_COLUMN: u32 = 999_999;

/// A contiguous span of source text: 1-based lines plus column offsets
/// within the first and last line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTextRange", rename_all = "camelCase")]
pub struct TextRange {
    start_line: u32,
    end_line: u32,
    start_offset: u32,
    end_offset: u32,
}

/// Unchecked wire shape, validated into a [`TextRange`]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTextRange {
    start_line: u32,
    end_line: u32,
    start_offset: u32,
    end_offset: u32,
}

impl TryFrom<RawTextRange> for TextRange {
    type Error = DeckError;

    fn try_from(raw: RawTextRange) -> Result<Self, Self::Error> {
        TextRange::new(raw.start_line, raw.end_line, raw.start_offset, raw.end_offset)
    }
}

impl TextRange {
    /// Create a range, rejecting line 0 and reversed lines.
    ///
    /// Offsets are taken as given, including on single-line ranges.
    pub fn new(
        start_line: u32,
        end_line: u32,
        start_offset: u32,
        end_offset: u32,
    ) -> Result<Self, DeckError> {
        if start_line == 0 || start_line > end_line {
            return Err(DeckError::malformed_range(start_line, end_line));
        }
        Ok(Self {
            start_line,
            end_line,
            start_offset,
            end_offset,
        })
    }

    pub fn start_line(&self) -> u32 {
        self.start_line
    }

    pub fn end_line(&self) -> u32 {
        self.end_line
    }

    pub fn start_offset(&self) -> u32 {
        self.start_offset
    }

    pub fn end_offset(&self) -> u32 {
        self.end_offset
    }

    /// Number of lines touched by this range (always >= 1)
    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// Split into per-line segments, see [`decompose`]
    pub fn segments(&self) -> Vec<LineSegment> {
        decompose(Some(self))
    }
}

/// The part of a text range that falls on one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    pub line: u32,
    pub from: u32,
    /// End column, or [`UNBOUNDED_COLUMN`] when the segment runs to end of line
    pub to: u32,
}

impl LineSegment {
    pub fn new(line: u32, from: u32, to: u32) -> Self {
        Self { line, from, to }
    }

    /// Whether the segment extends to the end of its line
    pub fn is_open_ended(&self) -> bool {
        self.to == UNBOUNDED_COLUMN
    }
}

/// Decompose a range into one segment per covered line, ascending.
///
/// Only the first and last line are bounded by the range offsets; lines
/// strictly between them are covered from column 0 to end of line.
/// A missing range yields no segments.
pub fn decompose(range: Option<&TextRange>) -> Vec<LineSegment> {
    let Some(range) = range else {
        return Vec::new();
    };

    if range.is_single_line() {
        return vec![LineSegment::new(
            range.start_line,
            range.start_offset,
            range.end_offset,
        )];
    }

    let mut segments = Vec::with_capacity(range.line_count() as usize);
    segments.push(LineSegment::new(
        range.start_line,
        range.start_offset,
        UNBOUNDED_COLUMN,
    ));
    for line in (range.start_line + 1)..range.end_line {
        segments.push(LineSegment::new(line, 0, UNBOUNDED_COLUMN));
    }
    segments.push(LineSegment::new(range.end_line, 0, range.end_offset));
    segments
}

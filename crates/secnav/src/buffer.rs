//! Text buffer: an immutable, line-addressable snapshot of text.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with line-oriented read access and
//! coordinate conversion between `Position` (line, col) and rope char
//! indices. Navigation never mutates text, so the buffer exposes no editing
//! operations at all: the host hands the engine a snapshot, and applies any
//! resulting edit (an operator over the covered range) on its own storage.
//!
//! # Design choices
//!
//! - **ropey** provides O(log n) line indexing and battle-tested Unicode
//!   handling. We build a clean line-level API on top rather than
//!   reimplementing text data structures.
//! - **Columns are char offsets**, not byte offsets. Column 3 of `"café"` is
//!   `'é'`, not a byte in the middle of its UTF-8 encoding. Byte offsets
//!   never leak into the public API.
//! - **Lines are 1-indexed** at this API boundary, matching `Position`. The
//!   rope's internal 0-indexed lines never leak out.

use std::fs;
use std::io;
use std::path::Path;

use ropey::{Rope, RopeSlice};

use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// An immutable text buffer backed by a rope.
///
/// Every buffer has at least one line: an empty buffer is a single empty
/// line 1, so [`Position::BOF`] is always a valid position. A buffer whose
/// text ends with `\n` has a trailing empty line, matching how editors
/// display files.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer (one empty line).
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Create a buffer from a sequence of lines, joined with `\n` and with
    /// no trailing newline. `from_lines(&["a", "", "b"])` is a 3-line buffer.
    #[must_use]
    pub fn from_lines(lines: &[&str]) -> Self {
        Self::from_text(&lines.join("\n"))
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope. Prefer the typed accessors below, but this is
    /// available when a host needs direct rope operations.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total number of lines, always at least 1.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get a line by 1-indexed line number, including its trailing line
    /// ending (if any). Returns `None` if the line does not exist.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        if line >= 1 && line <= self.rope.len_lines() {
            Some(self.rope.line(line - 1))
        } else {
            None
        }
    }

    /// Get a line's content by 1-indexed line number, with any trailing line
    /// ending (`\n`, `\r\n`, `\r`) stripped. Returns `None` if the line does
    /// not exist.
    #[must_use]
    pub fn line_content(&self, line: usize) -> Option<RopeSlice<'_>> {
        let full = self.line(line)?;
        let content_len = content_len_of(full);
        Some(full.slice(..content_len))
    }

    /// Number of chars in a line excluding any trailing line ending. The
    /// valid cursor columns on a line are `0..=content_len` (the last one
    /// being the just-past-the-end position used by exclusive range
    /// endpoints). Returns `None` if the line does not exist.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(content_len_of)
    }

    /// True when the line exists and is blank: empty, or whitespace-only.
    ///
    /// A line of trailing spaces left behind by an editor still reads as a
    /// separator, so whitespace-only counts as blank.
    #[must_use]
    pub fn is_blank_line(&self, line: usize) -> bool {
        self.line_content(line)
            .is_some_and(|content| content.chars().all(char::is_whitespace))
    }

    /// Get the character at a position. Returns `None` if the position is
    /// out of bounds or sits just past the end of its line.
    #[must_use]
    pub fn char_at(&self, pos: Position) -> Option<char> {
        let idx = self.pos_to_char_idx(pos)?;
        if idx < self.rope.len_chars() {
            Some(self.rope.char(idx))
        } else {
            None
        }
    }

    /// Get a slice of text for the given range. Returns `None` if either
    /// endpoint is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range) -> Option<RopeSlice<'_>> {
        let start = self.pos_to_char_idx(range.start)?;
        let end = self.pos_to_char_idx(range.end)?;
        Some(self.rope.slice(start..end))
    }

    /// Collect all text into a `String`. Allocates; prefer `rope()` or
    /// `slice()` for zero-copy access when possible.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` to an absolute char index in the rope.
    ///
    /// Returns `None` if the line is out of bounds or the column exceeds the
    /// line's total char count (including its line ending). A column exactly
    /// equal to the line's char count is valid: it is the position just past
    /// the last character, used for exclusive range endpoints.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        if pos.line < 1 || pos.line > self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(pos.line - 1);
        let line_len = self.rope.line(pos.line - 1).len_chars();
        if pos.col > line_len {
            return None;
        }
        Some(line_start + pos.col)
    }

    /// Convert an absolute char index to a `Position`.
    ///
    /// Returns `None` if `char_idx > len_chars()`. An index equal to
    /// `len_chars()` returns the position just past the last character.
    #[must_use]
    pub fn char_idx_to_pos(&self, char_idx: usize) -> Option<Position> {
        if char_idx > self.rope.len_chars() {
            return None;
        }
        let line = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(line);
        Some(Position::new(line + 1, char_idx - line_start))
    }

    /// Clamp a position to the nearest valid position in the buffer.
    ///
    /// Lines beyond the last clamp to the last line; columns beyond the
    /// line's content length clamp to the content length. Hosts use this to
    /// establish the valid-position precondition before asking for a motion.
    #[must_use]
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.clamp(1, self.line_count());
        let max_col = self.line_content_len(line).unwrap_or(0);
        Position::new(line, pos.col.min(max_col))
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Chars in a line slice excluding the trailing `\n`, `\r\n`, or `\r`.
fn content_len_of(line: RopeSlice<'_>) -> usize {
    let total = line.len_chars();
    if total == 0 {
        return 0;
    }
    let last = line.char(total - 1);
    if last == '\n' {
        if total >= 2 && line.char(total - 2) == '\r' {
            total - 2
        } else {
            total - 1
        }
    } else if last == '\r' {
        total - 1
    } else {
        // Last line with no trailing newline.
        total
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Boundary matching: locate the nearest section boundary in a direction.
//!
//! [`find`] scans the buffer from a position, strictly forward or strictly
//! backward, and returns the first boundary span the scheme matches. Unlike
//! an editor's interactive search, a failed scan does **not** wrap around the
//! buffer: running out of lines means there is no boundary to go to, and the
//! caller treats that as a defined no-op.

use crate::buffer::Buffer;
use crate::position::Position;
use crate::scheme::{Anchor, Scheme};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Scan direction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

// ---------------------------------------------------------------------------
// MatchSpan
// ---------------------------------------------------------------------------

/// A matched boundary span: `start` and `end` edge positions.
///
/// For [`Scheme::Section`] the span is zero-width (`start == end`), the edge
/// sitting in front of the section's first character, at `(line, 0)`. Line 1
/// carries the synthetic beginning-of-file span at `(1, 0)`. For
/// [`Scheme::Definition`] the span covers the whole header line:
/// `(line, 0) .. (line, content_len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    /// Start edge of the span.
    pub start: Position,
    /// End edge of the span.
    pub end: Position,
}

impl MatchSpan {
    /// True when the span covers no characters.
    #[inline]
    #[must_use]
    pub fn is_zero_width(self) -> bool {
        self.start == self.end
    }

    /// The landing position for the given anchor rule.
    #[inline]
    #[must_use]
    pub const fn resolve(self, anchor: Anchor) -> Position {
        match anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
        }
    }
}

/// The span a scheme produces for a boundary at `line`.
///
/// Callers must have established that `line` is a boundary under `scheme`.
fn span_at(buf: &Buffer, scheme: Scheme, line: usize) -> MatchSpan {
    let edge = Position::new(line, 0);
    match scheme {
        Scheme::Section => MatchSpan {
            start: edge,
            end: edge,
        },
        Scheme::Definition => MatchSpan {
            start: edge,
            end: Position::new(line, buf.line_content_len(line).unwrap_or(0)),
        },
    }
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

/// Find the nearest boundary strictly after (`Forward`) or strictly before
/// (`Backward`) `from`, in document order.
///
/// Strictness is judged on the span's start position. Boundary spans start
/// at column 0, so a Forward scan can only land on a later line, while a
/// Backward scan from the middle of a boundary line lands on that line's own
/// column 0.
///
/// Returns `None` when no boundary exists before the respective end of the
/// buffer. There is no wraparound, and `(1, 0)` matches at most once per
/// Backward scan: never again once the cursor already stands on it.
#[must_use]
pub fn find(buf: &Buffer, from: Position, scheme: Scheme, direction: Direction) -> Option<MatchSpan> {
    match direction {
        Direction::Forward => {
            // Spans start at column 0, so anything strictly after the cursor
            // lies on a later line.
            for line in (from.line + 1)..=buf.line_count() {
                if scheme.is_boundary_line(buf, line) {
                    return Some(span_at(buf, scheme, line));
                }
            }
            None
        }
        Direction::Backward => {
            for line in (1..=from.line).rev() {
                if scheme.is_boundary_line(buf, line) {
                    let span = span_at(buf, scheme, line);
                    if span.start < from {
                        return Some(span);
                    }
                }
            }
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

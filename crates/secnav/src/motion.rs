//! Section motions: the public entry point of the engine.
//!
//! [`apply`] resolves one navigation request against a buffer snapshot:
//! find the nearest boundary in the requested direction, land the cursor on
//! the scheme's anchor edge, update the selection, and report the covered
//! range. Four named motions wrap the common requests:
//!
//! | Motion                 | Scheme       | Direction |
//! |------------------------|--------------|-----------|
//! | [`section_forward`]    | `Section`    | Forward   |
//! | [`section_backward`]   | `Section`    | Backward  |
//! | [`definition_forward`] | `Definition` | Forward   |
//! | [`definition_backward`]| `Definition` | Backward  |
//!
//! # Operator targets
//!
//! The outcome's `covered` field is the half-open character range between
//! the original and new cursor, ordered. A host with a pending operator (a
//! delete-to-next-section command, say) applies the operator to that range
//! and must treat it as consumed exactly once. When no boundary exists in
//! the requested direction the whole request is a defined no-op: same
//! cursor, untouched selection, empty covered range. Never an error.

use crate::boundary::{self, Direction};
use crate::buffer::Buffer;
use crate::position::{Position, Range};
use crate::scheme::Scheme;
use crate::selection::{self, Selection};

// ---------------------------------------------------------------------------
// Request / outcome
// ---------------------------------------------------------------------------

/// One navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionRequest {
    /// Boundary-detection scheme to navigate by.
    pub scheme: Scheme,
    /// Scan direction.
    pub direction: Direction,
    /// When true, grow the selection instead of relocating a bare cursor.
    pub extend: bool,
    /// Repeat count. The motion re-runs from each landing position and
    /// stops early at the last reachable boundary. A count of 0 is a no-op.
    pub count: usize,
}

impl MotionRequest {
    /// A plain single-step request: no extend, count 1.
    #[inline]
    #[must_use]
    pub const fn new(scheme: Scheme, direction: Direction) -> Self {
        Self {
            scheme,
            direction,
            extend: false,
            count: 1,
        }
    }
}

/// The result of one navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionOutcome {
    /// Where the cursor landed (unchanged if nothing matched).
    pub cursor: Position,
    /// The selection after the motion, `None` when cleared or never begun.
    pub selection: Option<Selection>,
    /// Half-open character range between the original and new cursor,
    /// ordered. Empty exactly when the cursor did not move.
    pub covered: Range,
}

impl MotionOutcome {
    /// True when the cursor moved.
    #[inline]
    #[must_use]
    pub fn moved(&self) -> bool {
        !self.covered.is_empty()
    }
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Resolve one navigation request.
///
/// The buffer is read-only for the duration of the call and nothing here has
/// side effects: the host owns the visible cursor and selection and decides
/// what to do with the returned state.
#[must_use]
pub fn apply(
    buf: &Buffer,
    cursor: Position,
    current: Option<Selection>,
    request: MotionRequest,
) -> MotionOutcome {
    let anchor_rule = request.scheme.anchor();

    let mut landed = cursor;
    for _ in 0..request.count {
        match boundary::find(buf, landed, request.scheme, request.direction) {
            Some(span) => landed = span.resolve(anchor_rule),
            None => break,
        }
    }

    if landed == cursor {
        // No boundary in that direction: a defined no-op. The selection is
        // left untouched even in extend mode.
        return MotionOutcome {
            cursor,
            selection: current,
            covered: Range::point(cursor),
        };
    }

    let selection = selection::begin_or_continue(current, request.extend, cursor)
        .map(|sel| sel.with_active(landed));

    MotionOutcome {
        cursor: landed,
        selection,
        covered: Range::ordered(cursor, landed),
    }
}

// ---------------------------------------------------------------------------
// Named motions
// ---------------------------------------------------------------------------

/// Forward to the start of the next section.
#[must_use]
pub fn section_forward(buf: &Buffer, pos: Position) -> Position {
    apply(buf, pos, None, MotionRequest::new(Scheme::Section, Direction::Forward)).cursor
}

/// Backward to the start of the previous section.
#[must_use]
pub fn section_backward(buf: &Buffer, pos: Position) -> Position {
    apply(buf, pos, None, MotionRequest::new(Scheme::Section, Direction::Backward)).cursor
}

/// Forward to the next definition header.
#[must_use]
pub fn definition_forward(buf: &Buffer, pos: Position) -> Position {
    apply(buf, pos, None, MotionRequest::new(Scheme::Definition, Direction::Forward)).cursor
}

/// Backward to the previous definition header.
#[must_use]
pub fn definition_backward(buf: &Buffer, pos: Position) -> Position {
    apply(buf, pos, None, MotionRequest::new(Scheme::Definition, Direction::Backward)).cursor
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Selection tracking across extend-mode movements.
//!
//! A [`Selection`] is an anchor/active pair. The anchor is the fixed end: it
//! is set once, when the selection begins, and never moves afterwards. The
//! active endpoint is the moving end, updated to the cursor's landing
//! position after every extend-mode motion. Consecutive extend motions
//! therefore grow one continuous range instead of restarting it, and a
//! single non-extend motion clears the selection entirely.
//!
//! The pair is deliberately unordered: the active endpoint may sit before
//! the anchor after a backward motion. [`Selection::range`] normalizes.

use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// An in-progress selection: fixed anchor, movable active endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: Position,
    active: Position,
}

impl Selection {
    /// Create a selection with both endpoints at `pos`, the state a
    /// selection starts in before its first motion.
    #[inline]
    #[must_use]
    pub const fn at(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// The fixed endpoint.
    #[inline]
    #[must_use]
    pub const fn anchor(self) -> Position {
        self.anchor
    }

    /// The moving endpoint.
    #[inline]
    #[must_use]
    pub const fn active(self) -> Position {
        self.active
    }

    /// This selection with the active endpoint moved to `pos`. The anchor is
    /// preserved unchanged.
    #[inline]
    #[must_use]
    pub const fn with_active(self, pos: Position) -> Self {
        Self {
            anchor: self.anchor,
            active: pos,
        }
    }

    /// The selected range, normalized so `start <= end` regardless of which
    /// side of the anchor the active endpoint sits on.
    #[inline]
    #[must_use]
    pub fn range(self) -> Range {
        Range::ordered(self.anchor, self.active)
    }

    /// True when the selection covers no characters.
    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.anchor == self.active
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Decide the selection state for a motion, before the cursor moves.
///
/// - `extend == false`: the motion is a bare cursor relocation; any existing
///   selection is cleared.
/// - `extend == true`, no existing selection: a new selection is created,
///   anchored at the pre-move cursor.
/// - `extend == true`, existing selection: it is kept as is, anchor
///   untouched.
///
/// After the motion resolves, the caller moves the active endpoint to the
/// landing position via [`Selection::with_active`].
#[must_use]
pub fn begin_or_continue(
    existing: Option<Selection>,
    extend: bool,
    pre_move: Position,
) -> Option<Selection> {
    if !extend {
        return None;
    }
    Some(existing.unwrap_or_else(|| Selection::at(pre_move)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn p(line: usize, col: usize) -> Position {
        Position::new(line, col)
    }

    // -- Selection value type -----------------------------------------------

    #[test]
    fn at_starts_empty() {
        let sel = Selection::at(p(2, 3));
        assert_eq!(sel.anchor(), p(2, 3));
        assert_eq!(sel.active(), p(2, 3));
        assert!(sel.is_empty());
    }

    #[test]
    fn with_active_preserves_anchor() {
        let sel = Selection::at(p(2, 3)).with_active(p(5, 0));
        assert_eq!(sel.anchor(), p(2, 3));
        assert_eq!(sel.active(), p(5, 0));
        assert!(!sel.is_empty());
    }

    #[test]
    fn with_active_chains_keep_original_anchor() {
        let sel = Selection::at(p(1, 0))
            .with_active(p(3, 0))
            .with_active(p(6, 0));
        assert_eq!(sel.anchor(), p(1, 0));
        assert_eq!(sel.active(), p(6, 0));
    }

    #[test]
    fn range_forward_selection() {
        let sel = Selection::at(p(1, 0)).with_active(p(3, 2));
        let r = sel.range();
        assert_eq!(r.start, p(1, 0));
        assert_eq!(r.end, p(3, 2));
    }

    #[test]
    fn range_backward_selection_is_normalized() {
        let sel = Selection::at(p(4, 5)).with_active(p(2, 0));
        let r = sel.range();
        assert_eq!(r.start, p(2, 0));
        assert_eq!(r.end, p(4, 5));
    }

    // -- begin_or_continue --------------------------------------------------

    #[test]
    fn non_extend_clears_selection() {
        let existing = Some(Selection::at(p(1, 0)).with_active(p(3, 0)));
        assert_eq!(begin_or_continue(existing, false, p(3, 0)), None);
        assert_eq!(begin_or_continue(None, false, p(3, 0)), None);
    }

    #[test]
    fn extend_creates_selection_at_pre_move_cursor() {
        let sel = begin_or_continue(None, true, p(2, 4)).unwrap();
        assert_eq!(sel.anchor(), p(2, 4));
        assert_eq!(sel.active(), p(2, 4));
    }

    #[test]
    fn extend_keeps_existing_anchor() {
        let existing = Selection::at(p(1, 0)).with_active(p(3, 0));
        let sel = begin_or_continue(Some(existing), true, p(3, 0)).unwrap();
        assert_eq!(sel.anchor(), p(1, 0));
        assert_eq!(sel, existing);
    }
}

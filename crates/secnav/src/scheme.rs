//! Boundary-detection schemes.
//!
//! A [`Scheme`] decides two things: which lines of a buffer start a section
//! (the boundary predicate), and which edge of a matched span the cursor
//! lands on (the [`Anchor`] rule). Both are fixed per scheme:
//!
//! | Scheme       | Boundary line                                        | Lands on |
//! |--------------|------------------------------------------------------|----------|
//! | `Section`    | first line of the buffer, or a non-indented line     | span end |
//! |              | directly after a blank line                          |          |
//! | `Definition` | non-indented line containing `=` and ending in `:`   | span start |
//!
//! The anchor rule depends only on the scheme, never on the scan direction.
//! That separation is deliberate: searching backward for a definition header
//! still lands on the header's first character, not its tail.
//!
//! `Scheme` is a closed enumeration rather than open trait dispatch. Only two
//! schemes exist and new ones are rare, so a new variant (with its predicate
//! and anchor arms) keeps the matcher exhaustive and easy to verify.
//! Predicates are pure: they read buffer content only, never cursor or
//! selection state.

use std::fmt;

use crate::buffer::Buffer;

// ---------------------------------------------------------------------------
// Anchor
// ---------------------------------------------------------------------------

/// Which edge of a matched span the cursor lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Land on the span's start edge.
    Start,
    /// Land on the span's end edge.
    End,
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A named boundary-detection scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Top-level sections: a line immediately following a blank line whose
    /// first character is non-whitespace, or the first line of the buffer
    /// (the synthetic beginning-of-file boundary).
    Section,
    /// Definition headers: a line whose first character is non-whitespace,
    /// which contains an `=`, and whose final character is `:`.
    Definition,
}

impl Scheme {
    /// All built-in schemes.
    pub const ALL: [Self; 2] = [Self::Section, Self::Definition];

    /// Look up a scheme by its registered name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "section" => Some(Self::Section),
            "definition" => Some(Self::Definition),
            _ => None,
        }
    }

    /// The scheme's registered name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Definition => "definition",
        }
    }

    /// Which edge of a matched span the cursor lands on.
    ///
    /// `Section` spans are the zero-width edge in front of the section, so
    /// the cursor takes the end edge: the first character of the new
    /// section, past the separating blank line. `Definition` spans are the
    /// whole header line and the cursor takes the start: the header's first
    /// character.
    #[inline]
    #[must_use]
    pub const fn anchor(self) -> Anchor {
        match self {
            Self::Section => Anchor::End,
            Self::Definition => Anchor::Start,
        }
    }

    /// True when `line` (1-indexed) is a boundary under this scheme.
    ///
    /// Pure over buffer content; returns `false` for lines that do not
    /// exist.
    #[must_use]
    pub fn is_boundary_line(self, buf: &Buffer, line: usize) -> bool {
        match self {
            Self::Section => {
                if buf.line(line).is_none() {
                    return false;
                }
                // Line 1 is always a boundary: the beginning-of-file marker.
                line == 1
                    || (buf.is_blank_line(line - 1) && starts_non_whitespace(buf, line))
            }
            Self::Definition => {
                let Some(content) = buf.line_content(line) else {
                    return false;
                };
                let len = content.len_chars();
                if len == 0 {
                    return false;
                }
                !content.char(0).is_whitespace()
                    && content.chars().any(|ch| ch == '=')
                    && content.char(len - 1) == ':'
            }
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True when the line has a first character and it is not whitespace.
fn starts_non_whitespace(buf: &Buffer, line: usize) -> bool {
    buf.line_content(line)
        .and_then(|content| content.chars().next())
        .is_some_and(|ch| !ch.is_whitespace())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

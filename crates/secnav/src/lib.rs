//! # secnav: section-boundary navigation for text buffers
//!
//! Given an immutable buffer snapshot and a cursor, this crate finds the
//! nearest section boundary in a direction and relocates the cursor there,
//! optionally growing a selection, and reports the covered range so a host
//! can use the movement as the target of a pending edit operator. The crate
//! is the decision logic only: key bindings, command registration, and
//! rendering belong to the host.
//!
//! - **[`position`]**: `Position` (1-indexed line, 0-indexed char column)
//!   and the half-open `Range`
//! - **[`buffer`]**: immutable rope-backed `Buffer` with line access and
//!   coordinate conversion
//! - **[`scheme`]**: boundary-detection schemes and their anchor rules
//! - **[`boundary`]**: directional boundary matching
//! - **[`selection`]**: anchor/active selection tracking across extend
//!   motions
//! - **[`motion`]**: the public entry point composing the above

pub mod boundary;
pub mod buffer;
pub mod motion;
pub mod position;
pub mod scheme;
pub mod selection;

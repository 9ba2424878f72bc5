//! Content-diffing core: given two sequences of extracted content blocks,
//! classify each block as unchanged, added, removed, or modified.
//!
//! The classifier in [`compare`] is the authoritative one: it compares
//! aggressively-normalized keys with set semantics and several noise gates.
//! The older raw-text matcher lives in [`pairwise`] for callers who want
//! the looser historical behavior.

mod compare;
mod consts;
pub mod models;
mod normalize;
pub mod pairwise;
mod similarity;

pub use crate::compare::compare;
pub use crate::models::{ChangeReport, Excerpt, Modification};
pub use crate::normalize::normalize;
pub use crate::similarity::ratio;

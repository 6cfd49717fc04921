//! Constraint trees and how they match letters
//!
//! A [`Constraint`] is an immutable tree built once per expression. Matching a tree against a
//! word threads the *remainder* (the letters not yet consumed) through the tree; only the two
//! leaf kinds, [`Constraint::Literal`] and [`Constraint::Wildcard`], consume a letter.
//!
//! Node kinds:
//!
//!     Literal       word        next letter equals the word's initial (case-insensitive)
//!     Wildcard      .           any single letter
//!     Sequence      <a b>       every child, in order
//!     AllOf         [a b]       every child exactly once, in any order
//!     AnySubset     {a b}       any subset of the children, in any order
//!     Alternative   (a b)       exactly one child
//!     Optional      a?          the child, or nothing
//!
//! The [`matching`] module holds the backtracking engine; [`result`] holds the partial-match
//! values it produces, and [`letters`] the shared views of a candidate they consume.

pub mod letters;
pub mod matching;
pub mod node;
pub mod result;

pub use letters::Letters;
pub use matching::Matches;
pub use node::{Constraint, Group};
pub use result::{Acronym, Item, MatchResult};

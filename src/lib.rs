//! # visie
//!
//! A simple initialism enumerator. It helps you name things with acronyms.
//!
//! A constraint expression such as `<. is? a? [pleasing orange home noise expeller]>` is
//! parsed into a [`Constraint`](constraint::Constraint) tree, and every candidate word from a
//! dictionary is checked for the ways the tree's leaves can spell it, one letter per leaf.
//!
//! Pipeline:
//!     grammar text -> [grammar] (tokens, parser) -> [constraint] tree -> [generate] over a
//!     candidate stream ([dictionary], optionally expanded by [variants]) -> acronyms
//!
//! Settings for the command-line tool live in [config].

pub mod config;
pub mod constraint;
pub mod dictionary;
pub mod generate;
pub mod grammar;
pub mod variants;

pub use constraint::{Acronym, Constraint, Item, Letters, MatchResult};
pub use generate::{generate, Generator};
pub use grammar::{parse, ParseError, ParseErrorKind};

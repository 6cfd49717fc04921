//! Backtracking match engine
//!
//! Every node kind enumerates the ways it can consume a prefix of the letters it is given,
//! lazily, as an iterator of [`MatchResult`]s. Each result carries what is left over; parents
//! decide what to do with it. A failed match is simply an empty iterator.
//!
//! Enumeration order is deterministic:
//!     - Sequence, AllOf, AnySubset try children in ascending index order
//!     - Alternative tries children in order
//!     - Optional and AnySubset yield their "consume nothing" result first
//!
//! Remainders are [`Letters`] views sharing one buffer per candidate, so no letters are
//! copied while matching and the iterators own everything they still need.

use std::iter;

use super::letters::Letters;
use super::node::Constraint;
use super::result::{Item, MatchResult};

/// Lazy stream of match results
pub type Matches<'a> = Box<dyn Iterator<Item = MatchResult<'a>> + 'a>;

impl Constraint {
    /// Every way this node can consume a prefix of `letters`, complete or not
    pub fn match_letters<'a>(&'a self, letters: &[char]) -> Matches<'a> {
        self.match_from(Letters::from(letters))
    }

    /// [`Constraint::match_letters`] over a view the caller already holds
    pub fn match_from<'a>(&'a self, letters: Letters) -> Matches<'a> {
        match self {
            Constraint::Literal(word) => match (letters.split_first(), word.chars().next()) {
                (Some((letter, rest)), Some(initial)) if same_letter(letter, initial) => {
                    Box::new(iter::once(MatchResult::new(
                        vec![Item::Word(word.as_str())],
                        rest,
                    )))
                }
                _ => Box::new(iter::empty()),
            },
            Constraint::Wildcard => match letters.split_first() {
                Some((letter, rest)) => {
                    Box::new(iter::once(MatchResult::new(vec![Item::Letter(letter)], rest)))
                }
                None => Box::new(iter::empty()),
            },
            Constraint::Sequence(children) => match_sequence(children, letters),
            Constraint::AllOf(children) => {
                match_all_of(children, (0..children.len()).collect(), letters)
            }
            Constraint::AnySubset(children) => Box::new(
                iter::once(MatchResult::skip(letters.clone())).chain(match_any_subset(
                    children,
                    (0..children.len()).collect(),
                    letters,
                )),
            ),
            Constraint::Alternative(children) => Box::new(
                children
                    .iter()
                    .flat_map(move |child| child.match_from(letters.clone())),
            ),
            Constraint::Optional(inner) => Box::new(
                iter::once(MatchResult::skip(letters.clone())).chain(match_sequence(
                    std::slice::from_ref(inner.as_ref()),
                    letters,
                )),
            ),
        }
    }

    /// Every way this node can consume *all* of `letters`
    pub fn matches<'a>(&'a self, letters: &[char]) -> impl Iterator<Item = MatchResult<'a>> + 'a {
        self.complete_matches(Letters::from(letters))
    }

    /// [`Constraint::matches`] over a view the caller already holds
    pub fn complete_matches<'a>(
        &'a self,
        letters: Letters,
    ) -> impl Iterator<Item = MatchResult<'a>> + 'a {
        self.match_from(letters).filter(MatchResult::is_complete)
    }
}

fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// All children, strictly in order. Only the last child may leave letters unconsumed for
/// the caller; earlier children hand whatever they leave to their successors.
fn match_sequence<'a>(children: &'a [Constraint], letters: Letters) -> Matches<'a> {
    let Some((first, rest)) = children.split_first() else {
        return Box::new(iter::empty());
    };
    if rest.is_empty() {
        return first.match_from(letters);
    }
    Box::new(first.match_from(letters).flat_map(move |head| {
        let remainder = head.remainder_view().clone();
        match_sequence(rest, remainder).map(move |tail| head.clone().then(tail))
    }))
}

/// Every child in `pending` exactly once, in any order
fn match_all_of<'a>(
    children: &'a [Constraint],
    pending: Vec<usize>,
    letters: Letters,
) -> Matches<'a> {
    if let [only] = pending[..] {
        return children[only].match_from(letters);
    }
    Box::new((0..pending.len()).flat_map(move |slot| {
        let others = without(&pending, slot);
        children[pending[slot]]
            .match_from(letters.clone())
            .flat_map(move |head| {
                let remainder = head.remainder_view().clone();
                match_all_of(children, others.clone(), remainder)
                    .map(move |tail| head.clone().then(tail))
            })
    }))
}

/// Any non-empty subset of the children in `pending`, in any order. The empty subset is
/// yielded once by the caller.
fn match_any_subset<'a>(
    children: &'a [Constraint],
    pending: Vec<usize>,
    letters: Letters,
) -> Matches<'a> {
    Box::new((0..pending.len()).flat_map(move |slot| {
        let others = without(&pending, slot);
        let available = letters.len();
        children[pending[slot]]
            .match_from(letters.clone())
            // Using a child that consumed nothing is the same as leaving it out. Dropping it
            // here means `{a? b c}` on "bc" yields `b c` once, where keeping it would repeat
            // the same items for every skipped optional.
            .filter(move |head| head.remainder().len() < available)
            .flat_map(move |head| {
                let extended: Matches<'a> = if others.is_empty() || head.is_complete() {
                    Box::new(iter::empty())
                } else {
                    let prefix = head.clone();
                    Box::new(
                        match_any_subset(children, others.clone(), head.remainder_view().clone())
                            .map(move |tail| prefix.clone().then(tail)),
                    )
                };
                iter::once(head).chain(extended)
            })
    }))
}

fn without(pending: &[usize], slot: usize) -> Vec<usize> {
    pending
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != slot)
        .map(|(_, &index)| index)
        .collect()
}

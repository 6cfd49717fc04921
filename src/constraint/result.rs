//! Partial matches and finished acronyms

use serde::Serialize;
use std::fmt;

use super::letters::Letters;

/// What one leaf contributed to a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item<'a> {
    /// A literal's full text
    Word(&'a str),
    /// The letter a wildcard consumed
    Letter(char),
}

impl Item<'_> {
    /// The character this item contributes to the acronym
    pub fn initial(&self) -> Option<char> {
        match self {
            Item::Word(word) => word.chars().next(),
            Item::Letter(letter) => Some(*letter),
        }
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Word(word) => write!(f, "{}", word),
            Item::Letter(letter) => write!(f, "{}", letter),
        }
    }
}

/// The outcome of one way of matching a node against some letters.
///
/// `remainder` is the unconsumed suffix of the letters the node was given. A result is
/// complete when nothing remains. Items borrow from the constraint tree only, so results
/// may outlive the buffer the candidate was matched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    items: Vec<Item<'a>>,
    remainder: Letters,
}

impl<'a> MatchResult<'a> {
    pub fn new(items: Vec<Item<'a>>, remainder: Letters) -> Self {
        Self { items, remainder }
    }

    /// A result that consumed nothing
    pub fn skip(letters: Letters) -> Self {
        Self::new(Vec::new(), letters)
    }

    pub fn items(&self) -> &[Item<'a>] {
        &self.items
    }

    pub fn remainder(&self) -> &[char] {
        self.remainder.as_slice()
    }

    /// The unconsumed letters, for handing on to the following siblings
    pub fn remainder_view(&self) -> &Letters {
        &self.remainder
    }

    pub fn is_complete(&self) -> bool {
        self.remainder.is_empty()
    }

    /// Chain a match of the following siblings onto this one
    pub fn then(mut self, next: MatchResult<'a>) -> Self {
        self.items.extend(next.items);
        self.remainder = next.remainder;
        self
    }

    /// The upper-cased initials of the items, in order
    pub fn name(&self) -> String {
        self.items
            .iter()
            .filter_map(Item::initial)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Detach the result from the tree and the candidate it was matched against
    pub fn to_acronym(&self) -> Acronym {
        Acronym {
            name: self.name(),
            items: self.items.iter().map(Item::to_string).collect(),
        }
    }
}

impl fmt::Display for MatchResult<'_> {
    /// Items separated by spaces, followed by `@remainder` when incomplete
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        if !self.is_complete() {
            write!(f, "@{}", self.remainder().iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// A complete solution, as reported to users
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Acronym {
    pub name: String,
    pub items: Vec<String>,
}

impl Acronym {
    /// The items joined by single spaces
    pub fn expansion(&self) -> String {
        self.items.join(" ")
    }
}

impl fmt::Display for Acronym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.expansion())
    }
}

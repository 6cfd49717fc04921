//! Constraint node definitions

use std::fmt;

/// The four bracketed group kinds, each with its own delimiter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// `<...>` all children, in order
    Sequence,
    /// `[...]` all children, any order
    AllOf,
    /// `{...}` any subset of the children, any order
    AnySubset,
    /// `(...)` exactly one child
    Alternative,
}

impl Group {
    pub fn open(&self) -> char {
        match self {
            Group::Sequence => '<',
            Group::AllOf => '[',
            Group::AnySubset => '{',
            Group::Alternative => '(',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Group::Sequence => '>',
            Group::AllOf => ']',
            Group::AnySubset => '}',
            Group::Alternative => ')',
        }
    }
}

/// A node of a constraint tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// A word; matches a letter equal to its initial and contributes the whole word
    Literal(String),
    /// Matches any single letter and contributes that letter
    Wildcard,
    Sequence(Vec<Constraint>),
    AllOf(Vec<Constraint>),
    AnySubset(Vec<Constraint>),
    Alternative(Vec<Constraint>),
    /// May be skipped, contributing nothing
    Optional(Box<Constraint>),
}

impl Constraint {
    pub fn literal(word: impl Into<String>) -> Self {
        Constraint::Literal(word.into())
    }

    pub fn optional(inner: Constraint) -> Self {
        Constraint::Optional(Box::new(inner))
    }

    /// Build the group node of the given kind
    pub fn group(group: Group, children: Vec<Constraint>) -> Self {
        match group {
            Group::Sequence => Constraint::Sequence(children),
            Group::AllOf => Constraint::AllOf(children),
            Group::AnySubset => Constraint::AnySubset(children),
            Group::Alternative => Constraint::Alternative(children),
        }
    }

    /// The group kind of this node, if it is a bracketed group
    pub fn group_kind(&self) -> Option<Group> {
        match self {
            Constraint::Sequence(_) => Some(Group::Sequence),
            Constraint::AllOf(_) => Some(Group::AllOf),
            Constraint::AnySubset(_) => Some(Group::AnySubset),
            Constraint::Alternative(_) => Some(Group::Alternative),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Constraint] {
        match self {
            Constraint::Literal(_) | Constraint::Wildcard => &[],
            Constraint::Sequence(children)
            | Constraint::AllOf(children)
            | Constraint::AnySubset(children)
            | Constraint::Alternative(children) => children,
            Constraint::Optional(inner) => std::slice::from_ref(inner.as_ref()),
        }
    }

    /// Whether this node consumes letters itself
    pub fn is_leaf(&self) -> bool {
        matches!(self, Constraint::Literal(_) | Constraint::Wildcard)
    }

    /// The fewest letters any match of this node can consume
    pub fn min_length(&self) -> usize {
        match self {
            Constraint::Literal(_) | Constraint::Wildcard => 1,
            Constraint::Sequence(children) | Constraint::AllOf(children) => {
                children.iter().map(Constraint::min_length).sum()
            }
            Constraint::AnySubset(_) | Constraint::Optional(_) => 0,
            Constraint::Alternative(children) => children
                .iter()
                .map(Constraint::min_length)
                .min()
                .unwrap_or(0),
        }
    }

    /// The most letters any match of this node can consume
    pub fn max_length(&self) -> usize {
        match self {
            Constraint::Literal(_) | Constraint::Wildcard => 1,
            Constraint::Sequence(children)
            | Constraint::AllOf(children)
            | Constraint::AnySubset(children) => children.iter().map(Constraint::max_length).sum(),
            Constraint::Alternative(children) => children
                .iter()
                .map(Constraint::max_length)
                .max()
                .unwrap_or(0),
            Constraint::Optional(inner) => inner.max_length(),
        }
    }
}

impl fmt::Display for Constraint {
    /// Renders the node back into grammar text
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Literal(word) => write!(f, "{}", word),
            Constraint::Wildcard => write!(f, "."),
            Constraint::Optional(inner) => write!(f, "{}?", inner),
            Constraint::Sequence(children)
            | Constraint::AllOf(children)
            | Constraint::AnySubset(children)
            | Constraint::Alternative(children) => {
                let group = self.group_kind().unwrap_or(Group::Sequence);
                write!(f, "{}", group.open())?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "{}", group.close())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;

    #[test]
    fn test_leaf_lengths() {
        assert_eq!(Constraint::literal("foo").min_length(), 1);
        assert_eq!(Constraint::literal("foo").max_length(), 1);
        assert_eq!(Constraint::Wildcard.min_length(), 1);
        assert_eq!(Constraint::Wildcard.max_length(), 1);
    }

    #[test]
    fn test_group_lengths() {
        let tree = parse("<. is? a? [pleasing orange home noise expeller]>").unwrap();
        assert_eq!(tree.min_length(), 6);
        assert_eq!(tree.max_length(), 8);

        let tree = parse("pleasing orange home noise expeller").unwrap();
        assert_eq!(tree.min_length(), 0);
        assert_eq!(tree.max_length(), 5);

        let tree = parse("(a <b c> [d e f]?)").unwrap();
        assert_eq!(tree.min_length(), 0);
        assert_eq!(tree.max_length(), 3);

        let tree = parse("(a <b c>)").unwrap();
        assert_eq!(tree.min_length(), 1);
        assert_eq!(tree.max_length(), 2);
    }

    #[test]
    fn test_empty_groups_have_zero_lengths() {
        assert_eq!(Constraint::Alternative(vec![]).min_length(), 0);
        assert_eq!(Constraint::Alternative(vec![]).max_length(), 0);
        assert_eq!(Constraint::Sequence(vec![]).max_length(), 0);
    }

    #[test]
    fn test_display_round_trips() {
        for source in [
            "foo",
            ".",
            "foo?",
            "<. is? a? [pleasing orange home noise expeller]>",
            "{pleasing home ({orange noise} expeller)}",
            "(a <b c>?)",
        ] {
            let tree = parse(source).unwrap();
            assert_eq!(tree.to_string(), source);
            assert_eq!(parse(&tree.to_string()).unwrap(), tree);
        }
    }

    #[test]
    fn test_top_level_words_display_as_braces() {
        assert_eq!(parse("a b").unwrap().to_string(), "{a b}");
    }

    #[test]
    fn test_children() {
        let tree = parse("<a b?>").unwrap();
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.children()[1].children(), &[Constraint::literal("b")]);
        assert!(tree.children()[0].is_leaf());
        assert!(!tree.is_leaf());
    }
}

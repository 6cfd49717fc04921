//! Shared views of a candidate's letters
//!
//! Matching hands the unconsumed suffix of a candidate from node to node. A [`Letters`] is
//! that suffix: a start index into letters shared by every result of the same candidate, so
//! narrowing never copies and results can outlive the caller's buffer.

use std::fmt;
use std::rc::Rc;

/// The letters of a candidate from some position onwards
#[derive(Clone)]
pub struct Letters {
    chars: Rc<[char]>,
    start: usize,
}

impl Letters {
    pub fn new(chars: impl Into<Rc<[char]>>) -> Self {
        Self {
            chars: chars.into(),
            start: 0,
        }
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars[self.start..]
    }

    pub fn len(&self) -> usize {
        self.chars.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The next letter and the view just past it
    pub fn split_first(&self) -> Option<(char, Letters)> {
        let first = *self.as_slice().first()?;
        let rest = Letters {
            chars: Rc::clone(&self.chars),
            start: self.start + 1,
        };
        Some((first, rest))
    }
}

impl From<&[char]> for Letters {
    fn from(chars: &[char]) -> Self {
        Self::new(chars)
    }
}

impl From<&str> for Letters {
    fn from(word: &str) -> Self {
        Self::new(word.chars().collect::<Rc<[char]>>())
    }
}

impl PartialEq for Letters {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Letters {}

impl fmt::Debug for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice().iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_first_narrows_the_view() {
        let letters = Letters::from("hone");
        let (first, rest) = letters.split_first().unwrap();
        assert_eq!(first, 'h');
        assert_eq!(rest.as_slice(), &['o', 'n', 'e']);
        assert_eq!(rest.len(), 3);
        // The original view is untouched
        assert_eq!(letters.len(), 4);
    }

    #[test]
    fn test_empty_view() {
        let letters = Letters::from("a").split_first().unwrap().1;
        assert!(letters.is_empty());
        assert_eq!(letters.split_first(), None);
    }

    #[test]
    fn test_views_compare_by_remaining_letters() {
        let tail = Letters::from("xne").split_first().unwrap().1;
        assert_eq!(tail, Letters::from("ne"));
        assert_ne!(tail, Letters::from("one"));
        assert_eq!(format!("{:?}", tail), "\"ne\"");
    }
}

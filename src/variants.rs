//! Phonetic spelling variants of dictionary words
//!
//! A word is cut into units, left to right. A two-letter unit found in the variation table
//! wins over its first letter alone. Every unit can be spelled as itself or as any of its
//! table alternatives, and the variants are every combination of those choices:
//!
//!     "kit" -> kit, keet, kiit, kyt, cit, ceet, ciit, cyt
//!
//! The first variant is always the lower-cased word itself.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

const TABLE: &[(&str, &[&str])] = &[
    ("c", &["k"]),
    ("k", &["c"]),
    ("i", &["ee", "ii", "y"]),
    ("ee", &["i", "ii", "y"]),
    ("oo", &["u"]),
    ("a", &["u", "o"]),
    ("o", &["u", "a"]),
    ("u", &["a", "o", "oo"]),
    ("j", &["g", "gg"]),
    ("g", &["gg"]),
    ("h", &["kh"]),
    ("kh", &["h", "ch"]),
    ("y", &["ee", "i", "ii"]),
    ("sh", &["xi"]),
    ("xi", &["sh"]),
    ("w", &["ui"]),
    ("ui", &["w"]),
];

static VARIATIONS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| TABLE.iter().copied().collect());

/// Split a lower-cased word into units, each with its spelling options (itself first)
fn units(word: &str) -> Vec<Vec<String>> {
    let chars: Vec<char> = word.chars().collect();
    let mut units = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let width = match chars.get(i..i + 2) {
            Some(pair) if VARIATIONS.contains_key(pair.iter().collect::<String>().as_str()) => 2,
            _ => 1,
        };
        let unit: String = chars[i..i + width].iter().collect();
        let mut options = vec![unit.clone()];
        if let Some(alternatives) = VARIATIONS.get(unit.as_str()) {
            options.extend(alternatives.iter().map(|s| s.to_string()));
        }
        units.push(options);
        i += width;
    }
    units
}

/// Lazy iterator over the distinct spelling variants of one word
pub struct Variants {
    units: Vec<Vec<String>>,
    // Current choice per unit; `None` once exhausted
    choice: Option<Vec<usize>>,
    seen: HashSet<String>,
}

impl Variants {
    fn new(word: &str) -> Self {
        let word = word.trim().to_lowercase();
        let units = units(&word);
        let choice = if units.is_empty() {
            None
        } else {
            Some(vec![0; units.len()])
        };
        Self {
            units,
            choice,
            seen: HashSet::new(),
        }
    }

    /// Step the odometer, last unit fastest
    fn advance(&mut self) {
        let Some(choice) = self.choice.as_mut() else {
            return;
        };
        for position in (0..choice.len()).rev() {
            choice[position] += 1;
            if choice[position] < self.units[position].len() {
                return;
            }
            choice[position] = 0;
        }
        self.choice = None;
    }
}

impl Iterator for Variants {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let choice = self.choice.as_ref()?;
            let variant: String = choice
                .iter()
                .zip(&self.units)
                .map(|(&option, unit)| unit[option].as_str())
                .collect();
            self.advance();
            if self.seen.insert(variant.clone()) {
                return Some(variant);
            }
        }
    }
}

/// The distinct spelling variants of `word`, the word itself first. Blank words have none.
pub fn generate_variants(word: &str) -> Variants {
    Variants::new(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(word: &str) -> Vec<String> {
        generate_variants(word).collect()
    }

    #[test]
    fn test_unmapped_word_is_its_only_variant() {
        assert_eq!(all("bent"), vec!["bent"]);
    }

    #[test]
    fn test_word_is_trimmed_and_lowercased() {
        assert_eq!(all("  BeNt\n"), vec!["bent"]);
    }

    #[test]
    fn test_blank_word_has_no_variants() {
        assert!(all("").is_empty());
        assert!(all("   ").is_empty());
    }

    #[test]
    fn test_product_order() {
        assert_eq!(
            all("kit"),
            vec!["kit", "keet", "kiit", "kyt", "cit", "ceet", "ciit", "cyt"]
        );
    }

    #[test]
    fn test_two_letter_units_win() {
        // "sh" is one unit, so "h" is never expanded to "kh" here
        assert_eq!(all("sh"), vec!["sh", "xi"]);
        assert_eq!(all("ee"), vec!["ee", "i", "ii", "y"]);
    }

    #[test]
    fn test_variants_are_distinct() {
        let variants = all("gee");
        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), variants.len());
        assert_eq!(variants[0], "gee");
        assert!(variants.contains(&"ggi".to_string()));
    }

    #[test]
    fn test_duplicates_across_units_are_dropped() {
        // "i" + "ii" and "ii" + "i" both spell "iii"
        let variants = all("ii");
        assert_eq!(variants.len(), 15);
        assert_eq!(&variants[..4], &["ii", "iee", "iii", "iy"]);
        assert_eq!(variants.iter().filter(|v| *v == "iii").count(), 1);
    }
}

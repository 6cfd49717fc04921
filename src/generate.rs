//! Enumerating acronyms over a stream of candidate words
//!
//! The [`Generator`] pulls candidates one at a time, drops those whose length the tree can't
//! possibly consume, and hands out the complete matches of each remaining candidate as the
//! match engine finds them.
//!
//! Candidate guard
//!
//!     A candidate is skipped when its upper-cased spelling is already the name of an acronym
//!     handed out earlier in the same run. This mostly matters with variant expansion, where
//!     several source words can produce the same spelling. It is *not* a general
//!     de-duplication of names: two candidates, or two arrangements of one candidate, may still
//!     produce the same name more than once.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::constraint::{Acronym, Constraint, Letters, MatchResult, Matches};

/// Iterator of acronyms for one constraint tree over one candidate stream.
///
/// Nothing is computed ahead of the consumer: a caller that stops after the first acronym
/// never pays for the remaining arrangements of that candidate, nor for later candidates.
pub struct Generator<'c, I> {
    root: &'c Constraint,
    candidates: I,
    min_length: usize,
    max_length: usize,
    yielded: HashSet<String>,
    current: Option<Candidate<'c>>,
    stats: Stats,
}

/// The candidate whose matches are being handed out
struct Candidate<'c> {
    word: String,
    matches: Matches<'c>,
    found: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct Stats {
    candidates: usize,
    matched: usize,
    acronyms: usize,
}

impl<'c, I, S> Generator<'c, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(root: &'c Constraint, candidates: impl IntoIterator<IntoIter = I, Item = S>) -> Self {
        Self {
            root,
            candidates: candidates.into_iter(),
            min_length: root.min_length(),
            max_length: root.max_length(),
            yielded: HashSet::new(),
            current: None,
            stats: Stats::default(),
        }
    }

    /// Shortest acronym to report. Never lower than the tree's own minimum.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length.max(self.root.min_length());
        self
    }

    /// The accepted candidate length range, inclusive
    pub fn length_bounds(&self) -> (usize, usize) {
        (self.min_length, self.max_length)
    }

    fn start(&mut self, word: &str) {
        self.stats.candidates += 1;
        if self.yielded.contains(&word.to_uppercase()) {
            trace!(candidate = word, "skipping candidate already produced as a name");
            return;
        }
        let letters = Letters::from(word);
        if letters.len() < self.min_length || letters.len() > self.max_length {
            return;
        }
        self.current = Some(Candidate {
            word: word.to_string(),
            matches: Box::new(self.root.complete_matches(letters)),
            found: 0,
        });
    }

    fn finish(&mut self) {
        if let Some(done) = self.current.take() {
            if done.found > 0 {
                trace!(candidate = %done.word, found = done.found, "matched candidate");
                self.stats.matched += 1;
            }
        }
    }

    fn hand_out(&mut self, result: MatchResult<'c>) -> Acronym {
        let acronym = result.to_acronym();
        self.yielded.insert(acronym.name.clone());
        self.stats.acronyms += 1;
        acronym
    }
}

impl<'c, I, S> Iterator for Generator<'c, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Acronym;

    fn next(&mut self) -> Option<Acronym> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(result) = current.matches.next() {
                    current.found += 1;
                    return Some(self.hand_out(result));
                }
                self.finish();
            }
            match self.candidates.next() {
                Some(candidate) => self.start(candidate.as_ref()),
                None => {
                    if self.stats.candidates > 0 {
                        debug!(
                            candidates = self.stats.candidates,
                            matched = self.stats.matched,
                            acronyms = self.stats.acronyms,
                            "candidate stream exhausted"
                        );
                        self.stats = Stats::default();
                    }
                    return None;
                }
            }
        }
    }
}

/// Acronyms of at least `min_length` letters spelled by `root` over `candidates`
pub fn generate<'c, C, S>(
    root: &'c Constraint,
    candidates: C,
    min_length: usize,
) -> Generator<'c, C::IntoIter>
where
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Generator::new(root, candidates).min_length(min_length)
}

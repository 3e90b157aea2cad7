//! The `mutator` module provides the objects that generate the candidate words one edit away
//! from a given word.  Mutators do not consult the dictionary; filtering candidates is the job
//! of the path search.

use crate::mutation::MutationStrategy;
use crate::word::ALPHABET;

/// The default upper bound on the length of words that the rearrangement mutator will permute.
pub static DEFAULT_REARRANGEMENT_LIMIT: usize = 7;

/// The lazily produced sequence of candidate words returned by a [`Mutator`].
pub type Mutations<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Trait that describes the functionality that an object that implements a mutation strategy
/// must provide.
pub trait Mutator {
    /// Return every candidate word one edit away from `word` under the strategy implemented by
    /// the mutator.  The sequence may contain duplicates and may contain `word` itself.
    ///
    /// # Arguments
    ///
    /// * `word` - The normalized word to mutate.
    fn mutations<'a>(&'a self, word: &'a str) -> Mutations<'a>;

    /// Returns the enum value identifying the mutation strategy implemented by the object.
    fn implements(&self) -> MutationStrategy;
}

/// Inserts every letter at every position of the word.
pub struct InsertionMutator;

impl Mutator for InsertionMutator {
    fn mutations<'a>(&'a self, word: &'a str) -> Mutations<'a> {
        let positions = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()));

        Box::new(positions.flat_map(move |i| {
            ALPHABET.iter().map(move |&letter| {
                let mut mutant = String::with_capacity(word.len() + 1);
                mutant.push_str(&word[..i]);
                mutant.push(letter as char);
                mutant.push_str(&word[i..]);
                mutant
            })
        }))
    }

    fn implements(&self) -> MutationStrategy {
        MutationStrategy::Insertion
    }
}

/// Removes each letter of the word in turn.
pub struct DeletionMutator;

impl Mutator for DeletionMutator {
    fn mutations<'a>(&'a self, word: &'a str) -> Mutations<'a> {
        Box::new(word.char_indices().map(move |(i, c)| {
            let mut mutant = String::with_capacity(word.len());
            mutant.push_str(&word[..i]);
            mutant.push_str(&word[i + c.len_utf8()..]);
            mutant
        }))
    }

    fn implements(&self) -> MutationStrategy {
        MutationStrategy::Deletion
    }
}

/// Replaces each letter of the word with every letter of the alphabet, including the letter
/// already in that position.
pub struct SubstitutionMutator;

impl Mutator for SubstitutionMutator {
    fn mutations<'a>(&'a self, word: &'a str) -> Mutations<'a> {
        Box::new(word.char_indices().flat_map(move |(i, c)| {
            ALPHABET.iter().map(move |&letter| {
                let mut mutant = String::with_capacity(word.len());
                mutant.push_str(&word[..i]);
                mutant.push(letter as char);
                mutant.push_str(&word[i + c.len_utf8()..]);
                mutant
            })
        }))
    }

    fn implements(&self) -> MutationStrategy {
        MutationStrategy::Substitution
    }
}

/// Produces every ordering of the letters of the word, including the original ordering.
pub struct RearrangementMutator {
    /// Words with more letters than the limit produce no rearrangements.
    limit: Option<usize>,
}

impl RearrangementMutator {
    /// Create a new rearrangement mutator.
    ///
    /// # Arguments
    ///
    /// * `limit` - The longest word the mutator will permute, or `None` for no limit.
    pub fn new(limit: Option<usize>) -> RearrangementMutator {
        RearrangementMutator { limit }
    }
}

impl Mutator for RearrangementMutator {
    fn mutations<'a>(&'a self, word: &'a str) -> Mutations<'a> {
        let letters: Vec<char> = word.chars().collect();

        if let Some(limit) = self.limit {
            if letters.len() > limit {
                log::trace!("Skipping rearrangements of {word}, longer than {limit} letters");
                return Box::new(std::iter::empty());
            }
        }

        Box::new(Permutations::new(letters))
    }

    fn implements(&self) -> MutationStrategy {
        MutationStrategy::Rearrangement
    }
}

/// Lazy permutation sequence using the iterative form of Heap's algorithm.  Each call to `next`
/// performs one swap, so no more than one permutation exists in memory at a time.
struct Permutations {
    letters: Vec<char>,
    counters: Vec<usize>,
    position: usize,
    emitted_first: bool,
}

impl Permutations {
    fn new(letters: Vec<char>) -> Permutations {
        let length = letters.len();
        Permutations {
            letters,
            counters: vec![0; length],
            position: 1,
            emitted_first: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if !self.emitted_first {
            self.emitted_first = true;
            return Some(self.letters.iter().collect());
        }

        while self.position < self.letters.len() {
            let i = self.position;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.letters.swap(0, i);
                } else {
                    self.letters.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.position = 1;
                return Some(self.letters.iter().collect());
            }

            self.counters[i] = 0;
            self.position += 1;
        }

        None
    }
}

/// The composite mutator for doublet paths.  Runs the rearrangement, insertion, deletion, and
/// substitution mutators in that order.
pub struct DoubletMutator {
    mutators: Vec<Box<dyn Mutator>>,
}

impl DoubletMutator {
    /// Create a new doublet mutator.
    ///
    /// # Arguments
    ///
    /// * `rearrangement_limit` - The longest word the rearrangement step will permute.
    pub fn new(rearrangement_limit: Option<usize>) -> DoubletMutator {
        DoubletMutator {
            mutators: vec![
                Box::new(RearrangementMutator::new(rearrangement_limit)),
                Box::new(InsertionMutator),
                Box::new(DeletionMutator),
                Box::new(SubstitutionMutator),
            ],
        }
    }
}

impl Mutator for DoubletMutator {
    fn mutations<'a>(&'a self, word: &'a str) -> Mutations<'a> {
        Box::new(self.mutators.iter().flat_map(move |m| m.mutations(word)))
    }

    fn implements(&self) -> MutationStrategy {
        MutationStrategy::Doublet
    }
}

/// Return a mutator object that implements the requested mutation strategy.
///
/// # Arguments
///
/// * `strategy` - The mutation strategy.
/// * `rearrangement_limit` - The longest word any rearrangement step will permute, or `None` for
/// no limit.
pub fn mutator_for(
    strategy: MutationStrategy,
    rearrangement_limit: Option<usize>,
) -> Box<dyn Mutator> {
    match strategy {
        MutationStrategy::Doublet => Box::new(DoubletMutator::new(rearrangement_limit)),
        MutationStrategy::Insertion => Box::new(InsertionMutator),
        MutationStrategy::Deletion => Box::new(DeletionMutator),
        MutationStrategy::Substitution => Box::new(SubstitutionMutator),
        MutationStrategy::Rearrangement => {
            Box::new(RearrangementMutator::new(rearrangement_limit))
        }
    }
}

/// Collect the candidates for `word` under `strategy`, using the default rearrangement limit.
///
/// # Arguments
///
/// * `word` - The normalized word to mutate.
/// * `strategy` - The mutation strategy.
pub fn generate_mutations(word: &str, strategy: MutationStrategy) -> Vec<String> {
    let mutator = mutator_for(strategy, Some(DEFAULT_REARRANGEMENT_LIMIT));
    let mutations = mutator.mutations(word).collect();
    mutations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_insertion_count_and_contents() {
        let mutations = generate_mutations("AT", MutationStrategy::Insertion);
        assert_eq!(mutations.len(), 3 * 26);
        assert!(mutations.contains(&String::from("CAT")));
        assert!(mutations.contains(&String::from("ACT")));
        assert!(mutations.contains(&String::from("ATE")));
        assert!(mutations.iter().all(|m| m.len() == 3));
    }

    #[test]
    fn test_insertion_into_empty_word() {
        let mutations = generate_mutations("", MutationStrategy::Insertion);
        assert_eq!(mutations.len(), 26);
        assert_eq!(mutations[0], "A");
        assert_eq!(mutations[25], "Z");
    }

    #[test]
    fn test_deletion() {
        let mutations = generate_mutations("CAT", MutationStrategy::Deletion);
        assert_eq!(mutations, vec!["AT", "CT", "CA"]);
        assert!(generate_mutations("", MutationStrategy::Deletion).is_empty());
    }

    #[test]
    fn test_substitution_includes_identity() {
        let mutations = generate_mutations("CAT", MutationStrategy::Substitution);
        assert_eq!(mutations.len(), 3 * 26);
        assert!(mutations.contains(&String::from("CAT")));
        assert!(mutations.contains(&String::from("COT")));
        assert!(mutations.contains(&String::from("CAB")));
        assert!(mutations.iter().all(|m| m.len() == 3));
    }

    #[test]
    fn test_rearrangement_produces_all_orderings() {
        let mutations = generate_mutations("STOP", MutationStrategy::Rearrangement);
        assert_eq!(mutations.len(), 24);
        assert_eq!(mutations[0], "STOP");

        let unique: HashSet<String> = mutations.into_iter().collect();
        assert_eq!(unique.len(), 24);
        assert!(unique.contains("POTS"));
        assert!(unique.contains("SPOT"));
        assert!(unique.contains("TOPS"));
    }

    #[test]
    fn test_rearrangement_with_repeated_letters() {
        let mutations = generate_mutations("AAB", MutationStrategy::Rearrangement);
        assert_eq!(mutations.len(), 6);

        let unique: HashSet<String> = mutations.into_iter().collect();
        let expected: HashSet<String> = ["AAB", "ABA", "BAA"].iter().map(|s| s.to_string()).collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn test_rearrangement_of_short_words() {
        assert_eq!(
            generate_mutations("", MutationStrategy::Rearrangement),
            vec![String::new()]
        );
        assert_eq!(
            generate_mutations("A", MutationStrategy::Rearrangement),
            vec![String::from("A")]
        );
    }

    #[test]
    fn test_rearrangement_limit() {
        let limited = RearrangementMutator::new(Some(3));
        assert_eq!(limited.mutations("ABCD").count(), 0);
        assert_eq!(limited.mutations("ABC").count(), 6);

        let unlimited = RearrangementMutator::new(None);
        assert_eq!(unlimited.mutations("ABCDE").count(), 120);
    }

    #[test]
    fn test_doublet_is_union_in_order() {
        let mutator = DoubletMutator::new(Some(DEFAULT_REARRANGEMENT_LIMIT));
        let mutations: Vec<String> = mutator.mutations("CAT").collect();

        // 3! rearrangements + 4 * 26 insertions + 3 deletions + 3 * 26 substitutions
        assert_eq!(mutations.len(), 6 + 104 + 3 + 78);
        assert_eq!(mutations[0], "CAT");
        assert_eq!(mutations[6], "ACAT");
        assert_eq!(mutations[6 + 104], "AT");
        assert_eq!(mutations[6 + 104 + 3], "AAT");
    }

    #[test]
    fn test_mutator_for_reports_strategy() {
        for strategy in crate::mutation::get_all_mutation_strategies() {
            assert_eq!(mutator_for(strategy, None).implements(), strategy);
        }
    }
}

//! The `search` module contains the path search engine.
//!
//! The engine performs a uniform-cost search over the implicit graph whose nodes are words and
//! whose edges are produced by a [`Mutator`].  The search starts at the end word and works
//! backward toward the start word, so the recorded predecessor of each word is the next word on
//! the path toward the end.  Walking the predecessors from the start word yields the path in
//! forward order without reversing it.
//!
//! Only the intermediate words of a path must be in the dictionary.  The end word seeds the
//! frontier without a membership check and the start word is matched by equality against the
//! generated candidates.

use crate::dictionary::Dictionary;
use crate::error::DoubletError;
use crate::mutation::MutationStrategy;
use crate::mutator::{mutator_for, Mutator, DEFAULT_REARRANGEMENT_LIMIT};
use crate::word::normalize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Settings that bound the work a single search may perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// The maximum number of frontier entries to expand before giving up, or `None` to run
    /// until the frontier is exhausted.
    pub max_expansions: Option<usize>,

    /// The longest word the rearrangement mutator will permute, or `None` for no limit.
    pub rearrangement_limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_expansions: None,
            rearrangement_limit: Some(DEFAULT_REARRANGEMENT_LIMIT),
        }
    }
}

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of words popped from the frontier.
    pub expanded: usize,

    /// Number of dictionary words added to the visit history.
    pub discovered: usize,
}

/// A word waiting on the frontier.  The derived ordering compares the distance first and the
/// word second, so among equal distances the lexicographically smallest word pops first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEntry {
    distance: usize,
    word: String,
}

/// The configurable path search engine.
pub struct PathSearch<'d> {
    dictionary: &'d Dictionary,
    strategy: MutationStrategy,
    mutator: Box<dyn Mutator>,
    max_expansions: Option<usize>,
}

impl<'d> PathSearch<'d> {
    /// Create a new search over `dictionary` using the default [`SearchOptions`].
    ///
    /// # Arguments
    ///
    /// * `dictionary` - The words allowed in the middle of a path.
    /// * `strategy` - The mutation strategy that defines the edges of the word graph.
    pub fn new(dictionary: &'d Dictionary, strategy: MutationStrategy) -> PathSearch<'d> {
        PathSearch::with_options(dictionary, strategy, &SearchOptions::default())
    }

    /// Create a new search over `dictionary` using `options`.
    ///
    /// # Arguments
    ///
    /// * `dictionary` - The words allowed in the middle of a path.
    /// * `strategy` - The mutation strategy that defines the edges of the word graph.
    /// * `options` - The limits that apply to the search.
    pub fn with_options(
        dictionary: &'d Dictionary,
        strategy: MutationStrategy,
        options: &SearchOptions,
    ) -> PathSearch<'d> {
        PathSearch {
            dictionary,
            strategy,
            mutator: mutator_for(strategy.inverse(), options.rearrangement_limit),
            max_expansions: options.max_expansions,
        }
    }

    /// Limit the number of frontier entries the search may expand.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> PathSearch<'d> {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Find a shortest path from `start` to `end`.  Both words are normalized before the search.
    ///
    /// # Arguments
    ///
    /// * `start` - The first word of the path.
    /// * `end` - The last word of the path.
    ///
    /// # Errors
    ///
    /// Returns [`DoubletError::NotFound`] if no path exists, or
    /// [`DoubletError::SearchLimitReached`] if the search expanded the maximum number of entries.
    pub fn find_path(&self, start: &str, end: &str) -> Result<Vec<String>, DoubletError> {
        self.find_path_with_statistics(start, end)
            .map(|(path, _statistics)| path)
    }

    /// Find a shortest path from `start` to `end` and return the search counters along with it.
    ///
    /// # Arguments
    ///
    /// * `start` - The first word of the path.
    /// * `end` - The last word of the path.
    pub fn find_path_with_statistics(
        &self,
        start: &str,
        end: &str,
    ) -> Result<(Vec<String>, SearchStatistics), DoubletError> {
        let start = normalize(start);
        let end = normalize(end);
        let mut statistics = SearchStatistics::default();

        if start == end {
            return Ok((vec![start], statistics));
        }

        log::debug!(
            "Searching for a {} path from {} to {}",
            self.strategy,
            start,
            end
        );

        let mut history: HashMap<String, String> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
        frontier.push(Reverse(FrontierEntry {
            distance: 0,
            word: end.clone(),
        }));

        while let Some(Reverse(current)) = frontier.pop() {
            if let Some(limit) = self.max_expansions {
                if statistics.expanded >= limit {
                    log::warn!(
                        "Stopping search from {} to {} after expanding {} words",
                        start,
                        end,
                        limit
                    );
                    return Err(DoubletError::SearchLimitReached(limit));
                }
            }
            statistics.expanded += 1;

            for candidate in self.mutator.mutations(&current.word) {
                if candidate == start {
                    history.insert(candidate, current.word.clone());
                    log::debug!(
                        "Found path at distance {} after expanding {} words ({} discovered)",
                        current.distance + 1,
                        statistics.expanded,
                        statistics.discovered
                    );
                    let path = backtrack_path(&start, &end, &history)?;
                    return Ok((path, statistics));
                }

                if candidate == end
                    || !self.dictionary.contains(&candidate)
                    || history.contains_key(&candidate)
                {
                    continue;
                }

                history.insert(candidate.clone(), current.word.clone());
                statistics.discovered += 1;
                frontier.push(Reverse(FrontierEntry {
                    distance: current.distance + 1,
                    word: candidate,
                }));
            }
        }

        log::debug!(
            "Frontier exhausted after expanding {} words ({} discovered)",
            statistics.expanded,
            statistics.discovered
        );

        Err(DoubletError::NotFound { start, end })
    }
}

/// Walk the visit history from `start` until reaching `end`.
fn backtrack_path(
    start: &str,
    end: &str,
    history: &HashMap<String, String>,
) -> Result<Vec<String>, DoubletError> {
    let mut path = vec![String::from(start)];
    let mut word = start;

    while word != end {
        match history.get(word) {
            Some(next) => {
                path.push(next.clone());
                word = next;
            }
            None => {
                return Err(DoubletError::NotFound {
                    start: String::from(start),
                    end: String::from(end),
                })
            }
        }
    }

    Ok(path)
}

/// Find a shortest path from `start` to `end` under `strategy` with the default search options.
///
/// # Arguments
///
/// * `start` - The first word of the path.
/// * `end` - The last word of the path.
/// * `dictionary` - The words allowed in the middle of a path.
/// * `strategy` - The mutation strategy that defines the edges of the word graph.
pub fn find_path(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
    strategy: MutationStrategy,
) -> Result<Vec<String>, DoubletError> {
    PathSearch::new(dictionary, strategy).find_path(start, end)
}

/// Find a shortest path that may use any insertion, deletion, substitution, or rearrangement.
pub fn find_doublet_path(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
) -> Result<Vec<String>, DoubletError> {
    find_path(start, end, dictionary, MutationStrategy::Doublet)
}

/// Find a shortest word ladder, using only same-length substitutions.
pub fn find_swap_path(
    start: &str,
    end: &str,
    dictionary: &Dictionary,
) -> Result<Vec<String>, DoubletError> {
    find_path(start, end, dictionary, MutationStrategy::Substitution)
}

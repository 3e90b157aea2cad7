//! The `mutation` module contains the enumeration of the mutation strategies supported by the
//! library.

use crate::error::DoubletError;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// Each item in the enumeration represents a rule set that defines which one-edit
/// transformations of a word count as edges of the word graph.
#[derive(Hash, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Debug, Default)]
pub enum MutationStrategy {
    /// The union of all the other strategies.  Candidates are produced in the order
    /// rearrangement, insertion, deletion, substitution.
    #[default]
    Doublet,

    /// Insert one letter at any position in the word.
    ///
    /// # Example
    ///
    /// `AT` might become `CAT` or `ATE`.
    Insertion,

    /// Remove one letter from the word.
    ///
    /// # Example
    ///
    /// `CAT` might become `AT` or `CT`.
    Deletion,

    /// Replace one letter of the word with another letter.  This is the classic word ladder
    /// move and never changes the length of the word.
    ///
    /// # Example
    ///
    /// `CAT` might become `COT`.
    Substitution,

    /// Reorder all the letters of the word.
    ///
    /// # Example
    ///
    /// `STOP` might become `POTS` or `SPOT`.
    Rearrangement,
}

impl MutationStrategy {
    /// Return the strategy whose edges run in the opposite direction.  The path search explores
    /// backward from the end word, so it generates candidates with the inverse strategy.
    pub fn inverse(&self) -> MutationStrategy {
        match self {
            MutationStrategy::Insertion => MutationStrategy::Deletion,
            MutationStrategy::Deletion => MutationStrategy::Insertion,
            other => *other,
        }
    }
}

/// Provide the ability to convert a string value into a [`MutationStrategy`] enum.
impl FromStr for MutationStrategy {
    type Err = DoubletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "doublet" => Ok(MutationStrategy::Doublet),
            "insertion" => Ok(MutationStrategy::Insertion),
            "deletion" => Ok(MutationStrategy::Deletion),
            "substitution" | "swap" | "ladder" => Ok(MutationStrategy::Substitution),
            "rearrangement" | "scramble" => Ok(MutationStrategy::Rearrangement),
            _ => Err(DoubletError::StrategyNotSupported(String::from(s))),
        }
    }
}

impl fmt::Display for MutationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            MutationStrategy::Doublet => "Doublet",
            MutationStrategy::Insertion => "Insertion",
            MutationStrategy::Deletion => "Deletion",
            MutationStrategy::Substitution => "Substitution",
            MutationStrategy::Rearrangement => "Rearrangement",
        };

        write!(f, "{}", text)
    }
}

/// Return a list of all the available mutation strategies sorted by name.
pub fn get_all_mutation_strategies() -> Vec<MutationStrategy> {
    let mut strategies: Vec<MutationStrategy> =
        all_strategy_descriptions().into_keys().collect();

    strategies.sort_unstable_by_key(|a| a.to_string());

    strategies
}

/// Type that holds the description of a mutation strategy.
pub struct MutationStrategyDescription {
    /// The basic summary of the strategy.
    pub summary: &'static str,
    /// Extra useful details about the strategy.
    pub extra_details: &'static str,
    /// Alternate names accepted when parsing the strategy.
    pub aliases: Vec<&'static str>,
    /// Examples of strategy behavior.
    pub examples: &'static str,
}

/// Return a map of mutation strategies to the mutation strategy descriptions.
pub fn all_strategy_descriptions() -> HashMap<MutationStrategy, MutationStrategyDescription> {
    let mut strategy_map: HashMap<MutationStrategy, MutationStrategyDescription> = HashMap::new();

    strategy_map.insert(
        MutationStrategy::Doublet,
        MutationStrategyDescription {
            summary: "Allow any single insertion, deletion, substitution, or rearrangement of \
            the letters of a word.",
            extra_details: "The default strategy. Rearrangements are only generated for words \
            no longer than the rearrangement limit.",
            aliases: vec![],
            examples: "WORD might become SWORD, WOD, WARD, or DROW",
        },
    );

    strategy_map.insert(
        MutationStrategy::Insertion,
        MutationStrategyDescription {
            summary: "Insert one letter at any position in the word.",
            extra_details: "A word of length n produces (n + 1) * 26 candidates.",
            aliases: vec![],
            examples: "AT might become CAT, AFT, or ATE",
        },
    );

    strategy_map.insert(
        MutationStrategy::Deletion,
        MutationStrategyDescription {
            summary: "Remove one letter from the word.",
            extra_details: "A word of length n produces n candidates.",
            aliases: vec![],
            examples: "CAT might become AT, CT, or CA",
        },
    );

    strategy_map.insert(
        MutationStrategy::Substitution,
        MutationStrategyDescription {
            summary: "Replace one letter of the word with another letter.",
            extra_details: "The classic word ladder move. Paths built with this strategy never \
            change the length of the word. A word of length n produces n * 26 candidates.",
            aliases: vec!["swap", "ladder"],
            examples: "CAT might become COT, then COG, then DOG",
        },
    );

    strategy_map.insert(
        MutationStrategy::Rearrangement,
        MutationStrategyDescription {
            summary: "Reorder all the letters of the word.",
            extra_details: "A word of length n produces n! candidates, so words longer than the \
            rearrangement limit produce none.",
            aliases: vec!["scramble"],
            examples: "STOP might become POTS, SPOT, or TOPS",
        },
    );

    strategy_map
}

//! # Doublet Lib
//!
//! `doublet_lib` finds shortest transformation paths between two words, where each step of the
//! path applies a single mutation to the previous word and every intermediate word belongs to a
//! dictionary.
//!
//! ## Doublet Lib Design
//!
//! The library has two independent components:
//! - Mutators ([`mutator`]) produce the candidate words one edit away from a word according to a
//!   [`MutationStrategy`]: insertion, deletion, substitution, rearrangement, or the doublet
//!   union of all four.
//! - The path search ([`search`]) runs a uniform-cost search backward from the end word over
//!   the implicit graph the mutators define, keeps only dictionary words in the middle of the
//!   path, and walks the recorded predecessors forward from the start word.
//!
//! Loading the word list ([`dictionary`]) and reading search configuration files
//! ([`config_file`]) are support services for applications built on the library.

pub use self::dictionary::Dictionary;
pub use self::error::DoubletError;
pub use self::mutation::MutationStrategy;
pub use self::mutator::Mutator;
pub use self::search::{
    find_doublet_path, find_path, find_swap_path, PathSearch, SearchOptions, SearchStatistics,
};

pub mod config_file;
pub mod dictionary;
pub mod error;
mod json;
pub mod mutation;
pub mod mutator;
pub mod search;
pub mod word;

//! The `search_parameters` module provides the definition and functions for [`SearchParameters`].

use doublet_lib::config_file::ConfigurationFileDetails;
use doublet_lib::{MutationStrategy, SearchOptions};
use std::path::PathBuf;

/// The dictionary used when neither the command line nor a configuration file names one.
pub static DEFAULT_DICTIONARY: &str = "words.txt";

/// Object to capture the parameters needed to run one path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParameters {
    /// The word the path starts from, as given by the user.
    pub start: String,

    /// The word the path ends at, as given by the user.
    pub end: String,

    /// The location of the word list in the file system.
    pub dictionary: PathBuf,

    /// The mutation strategy that defines the edges of the word graph.
    pub strategy: MutationStrategy,

    /// True if the printed path should use spoiler markup.
    pub discord: bool,

    /// Limits that apply to the search.
    pub options: SearchOptions,
}

impl SearchParameters {
    /// Convert the parameters into configuration file details that will reproduce the same
    /// search settings.
    pub fn to_configuration(&self) -> ConfigurationFileDetails {
        ConfigurationFileDetails {
            dictionary: Some(self.dictionary.clone()),
            strategy: self.strategy,
            ladder: false,
            discord: self.discord,
            max_expansions: self.options.max_expansions,
            rearrangement_limit: self.options.rearrangement_limit,
        }
    }
}

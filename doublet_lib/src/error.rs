//! The `error` module contains `DoubletError`, the error enumeration used to communicate
//! library errors.

use std::convert::From;
use thiserror::Error;

/// The list of errors that the library can generate.
#[derive(Error, Debug)]
pub enum DoubletError {
    #[error("IO error: {0}")]
    IO(std::io::Error),

    /// An error indicating that JSON parsing failed.
    #[error("JSON error occurred: {0}")]
    JSON(serde_json::Error),

    /// An error indicating that the search exhausted the frontier without reaching the start
    /// word.
    #[error("Could not find path from {start} to {end}")]
    NotFound { start: String, end: String },

    /// An error indicating that the dictionary file could not be opened or read.
    #[error("Dictionary {0} could not be loaded: {1}")]
    InvalidDictionary(String, String),

    /// An error indicating that the search expanded the maximum number of frontier entries
    /// allowed without finding a path.
    #[error("Search stopped after expanding {0} words")]
    SearchLimitReached(usize),

    /// An error indicating that an API call requested a mutation strategy the library does not
    /// know.
    #[error("Mutation strategy {0} not supported")]
    StrategyNotSupported(String),

    /// An error indicating that the tool received a configuration file that it does not support.
    #[error("Configuration file {0} not supported")]
    ConfigFileNotSupported(String),

    /// An error indicating that the tool received a configuration file that does not have the
    /// correct file extension.
    #[error("Configuration file {0} does not have the correct extension")]
    ConfigFileBadExtension(String),

    /// An error indicating the configuration file contains an unusable value for a key.
    #[error("Configuration file {0} contains an invalid value for the {1} key: {2}")]
    ConfigFileInvalidValue(String, String, String),
}

impl From<std::io::Error> for DoubletError {
    fn from(e: std::io::Error) -> Self {
        DoubletError::IO(e)
    }
}

impl From<serde_json::Error> for DoubletError {
    fn from(e: serde_json::Error) -> Self {
        DoubletError::JSON(e)
    }
}

/// The `config_file` module contains code for reading and writing doublet configuration files.
/// A configuration file records the settings for a search (dictionary, strategy, and limits) so
/// that the same settings can be reused across many start/end pairs.
use crate::error::DoubletError;
use crate::json::*;
use crate::mutation::MutationStrategy;
use crate::mutator::DEFAULT_REARRANGEMENT_LIMIT;
use serde_json::{json, Value};
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The extension used for doublet configuration files.
pub static CONFIG_FILE_EXTENSION: &str = "dblt";

/// The key in the configuration file for the path to the dictionary.
pub static DICTIONARY_KEY: &str = "dictionary";

/// The key for the name of the mutation strategy.
pub static STRATEGY_KEY: &str = "strategy";

/// The key for the boolean value selecting substitution-only (ladder) paths.
pub static LADDER_KEY: &str = "ladder";

/// The key for the boolean value requesting spoiler-wrapped output.
pub static DISCORD_KEY: &str = "discord";

/// The key for the maximum number of words the search may expand.
pub static MAX_EXPANSIONS_KEY: &str = "max-expansions";

/// The key for the longest word the rearrangement mutator will permute.  A negative value
/// removes the limit.
pub static MAX_REARRANGEMENT_LENGTH_KEY: &str = "max-rearrangement-length";

/// Configuration details loaded from a .dblt configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationFileDetails {
    /// Path to the word list, if present in the configuration file.
    pub dictionary: Option<PathBuf>,

    /// The mutation strategy to search with.
    pub strategy: MutationStrategy,

    /// True if the search should only use same-length substitutions.  Takes precedence over
    /// `strategy`.
    pub ladder: bool,

    /// True if the path should be printed with spoiler markup.
    pub discord: bool,

    /// The maximum number of words the search may expand, if limited.
    pub max_expansions: Option<usize>,

    /// The longest word the rearrangement mutator will permute, if limited.
    pub rearrangement_limit: Option<usize>,
}

impl Default for ConfigurationFileDetails {
    fn default() -> Self {
        ConfigurationFileDetails {
            dictionary: None,
            strategy: MutationStrategy::Doublet,
            ladder: false,
            discord: false,
            max_expansions: None,
            rearrangement_limit: Some(DEFAULT_REARRANGEMENT_LIMIT),
        }
    }
}

impl ConfigurationFileDetails {
    /// Create a new configuration details object by loading the configuration from a JSON
    /// file.  The file must have the extension ".dblt".  Keys missing from the file keep their
    /// default values.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path to the configuration file in the file system.
    pub fn new_from_file(config_file: &str) -> Result<ConfigurationFileDetails, DoubletError> {
        let extension = Path::new(config_file).extension();

        // The file must have a .dblt extension.
        if extension != Some(OsStr::new(CONFIG_FILE_EXTENSION)) {
            return Err(DoubletError::ConfigFileBadExtension(String::from(
                config_file,
            )));
        }

        let json_value = match load_json_from_file_with_name(config_file) {
            Ok(v) if v.is_object() => v,
            Ok(_) | Err(DoubletError::JSON(_)) => {
                return Err(DoubletError::ConfigFileNotSupported(String::from(
                    config_file,
                )))
            }
            Err(e) => return Err(e),
        };

        ConfigurationFileDetails::new_from_json(config_file, &json_value)
    }

    /// Build the details from an already parsed JSON object.  A key that is present with a
    /// value of the wrong type is an error rather than a silent fall back to the default.
    fn new_from_json(
        config_file: &str,
        json_value: &Value,
    ) -> Result<ConfigurationFileDetails, DoubletError> {
        let invalid = |key: &str| {
            DoubletError::ConfigFileInvalidValue(
                String::from(config_file),
                String::from(key),
                json_value[key].to_string(),
            )
        };

        let mut details = ConfigurationFileDetails::default();

        if json_value.contains_key(DICTIONARY_KEY) {
            let dictionary = json_value
                .get_str_for_key(DICTIONARY_KEY)
                .ok_or_else(|| invalid(DICTIONARY_KEY))?;
            details.dictionary = Some(PathBuf::from(dictionary));
        }

        if json_value.contains_key(STRATEGY_KEY) {
            details.strategy = json_value
                .get_str_for_key(STRATEGY_KEY)
                .and_then(|s| MutationStrategy::from_str(s).ok())
                .ok_or_else(|| invalid(STRATEGY_KEY))?;
        }

        if json_value.contains_key(LADDER_KEY) {
            details.ladder = json_value
                .get_bool_for_key(LADDER_KEY)
                .ok_or_else(|| invalid(LADDER_KEY))?;
        }

        if json_value.contains_key(DISCORD_KEY) {
            details.discord = json_value
                .get_bool_for_key(DISCORD_KEY)
                .ok_or_else(|| invalid(DISCORD_KEY))?;
        }

        if json_value.contains_key(MAX_EXPANSIONS_KEY) {
            let max_expansions = json_value
                .get_int_for_key(MAX_EXPANSIONS_KEY)
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| invalid(MAX_EXPANSIONS_KEY))?;
            details.max_expansions = Some(max_expansions);
        }

        if json_value.contains_key(MAX_REARRANGEMENT_LENGTH_KEY) {
            // Negative lengths remove the limit.
            let length = json_value
                .get_int_for_key(MAX_REARRANGEMENT_LENGTH_KEY)
                .ok_or_else(|| invalid(MAX_REARRANGEMENT_LENGTH_KEY))?;
            details.rearrangement_limit = usize::try_from(length).ok();
        }

        Ok(details)
    }

    /// The strategy a search with these details should use.
    pub fn effective_strategy(&self) -> MutationStrategy {
        if self.ladder {
            MutationStrategy::Substitution
        } else {
            self.strategy
        }
    }

    /// Helper function to get the configuration as a JSON object.
    fn convert_to_json(&self) -> Value {
        let mut json_value = json!({});

        if let Some(dictionary) = &self.dictionary {
            json_value.set_str_for_key(DICTIONARY_KEY, &dictionary.to_string_lossy());
        }

        json_value.set_str_for_key(STRATEGY_KEY, &self.strategy.to_string());
        json_value.set_node_for_key(LADDER_KEY, json![self.ladder]);
        json_value.set_node_for_key(DISCORD_KEY, json![self.discord]);

        if let Some(max_expansions) = self.max_expansions {
            json_value.set_node_for_key(MAX_EXPANSIONS_KEY, json![max_expansions]);
        }

        let rearrangement_length: i64 = match self.rearrangement_limit {
            Some(limit) => limit as i64,
            None => -1,
        };
        json_value.set_node_for_key(MAX_REARRANGEMENT_LENGTH_KEY, json![rearrangement_length]);

        json_value
    }

    /// Create a configuration file in JSON form and write it to the path at `config_file`.
    ///
    /// # Arguments
    ///
    /// * `config_file` - The path in the file system to write the configuration file.
    pub fn write_to_file_as_json(&self, config_file: &str) -> Result<(), DoubletError> {
        let config_file_path = Path::new(config_file);

        if config_file_path.extension() != Some(OsStr::new(CONFIG_FILE_EXTENSION)) {
            return Err(DoubletError::ConfigFileBadExtension(String::from(
                config_file,
            )));
        }

        // Try to create the parent directory if it does not exist.
        if let Some(parent) = config_file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut f = std::fs::File::create(config_file_path)?;
        self.write_to_stream_as_json(&mut f)
    }

    /// Convert a configuration to JSON and write the JSON to `stream`.
    ///
    /// # Arguments
    ///
    /// * `stream` - The stream that will receive the JSON.
    pub fn write_to_stream_as_json(&self, stream: &mut dyn Write) -> Result<(), DoubletError> {
        let json_value = self.convert_to_json();

        // Now pretty print the JSON
        let standard_json = format!("{json_value}");
        let pretty_json =
            jsonxf::pretty_print(&standard_json).map_err(DoubletError::ConfigFileNotSupported)?;

        writeln!(stream, "{pretty_json}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_config_file_all_keys() {
        let file = write_config(
            CONFIG_FILE_EXTENSION,
            "{\
            \"dictionary\": \"/usr/share/dict/words\",
            \"strategy\": \"scramble\",
            \"ladder\": false,
            \"discord\": true,
            \"max-expansions\": 1000,
            \"max-rearrangement-length\": -1
        }",
        );

        let details =
            ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            details.dictionary,
            Some(PathBuf::from("/usr/share/dict/words"))
        );
        assert_eq!(details.strategy, MutationStrategy::Rearrangement);
        assert!(!details.ladder);
        assert!(details.discord);
        assert_eq!(details.max_expansions, Some(1000));
        assert_eq!(details.rearrangement_limit, None);
    }

    #[test]
    fn test_config_file_defaults() {
        let file = write_config(CONFIG_FILE_EXTENSION, "{ \"ladder\": true }");
        let details =
            ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap()).unwrap();

        assert_eq!(details.dictionary, None);
        assert_eq!(details.strategy, MutationStrategy::Doublet);
        assert_eq!(details.effective_strategy(), MutationStrategy::Substitution);
        assert_eq!(
            details.rearrangement_limit,
            Some(DEFAULT_REARRANGEMENT_LIMIT)
        );
    }

    #[test]
    fn test_config_file_bad_extension() {
        let file = write_config("json", "{}");
        let result = ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(DoubletError::ConfigFileBadExtension(_))
        ));
    }

    #[test]
    fn test_config_file_not_json() {
        let file = write_config(CONFIG_FILE_EXTENSION, "dictionary = words.txt");
        let result = ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(DoubletError::ConfigFileNotSupported(_))
        ));
    }

    #[test]
    fn test_config_file_unknown_strategy() {
        let file = write_config(CONFIG_FILE_EXTENSION, "{ \"strategy\": \"teleport\" }");
        match ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap()) {
            Err(DoubletError::ConfigFileInvalidValue(_, key, value)) => {
                assert_eq!(key, STRATEGY_KEY);
                assert_eq!(value, "\"teleport\"");
            }
            other => panic!("expected ConfigFileInvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_config_file_negative_expansions() {
        let file = write_config(CONFIG_FILE_EXTENSION, "{ \"max-expansions\": -5 }");
        let result = ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(DoubletError::ConfigFileInvalidValue(_, _, _))
        ));
    }

    #[test]
    fn test_config_file_wrong_value_types() {
        let cases = [
            (DICTIONARY_KEY, "{ \"dictionary\": 42 }", "42"),
            (STRATEGY_KEY, "{ \"strategy\": [\"Doublet\"] }", "[\"Doublet\"]"),
            (LADDER_KEY, "{ \"ladder\": \"yes\" }", "\"yes\""),
            (DISCORD_KEY, "{ \"discord\": 1 }", "1"),
            (MAX_EXPANSIONS_KEY, "{ \"max-expansions\": \"10\" }", "\"10\""),
            (
                MAX_REARRANGEMENT_LENGTH_KEY,
                "{ \"max-rearrangement-length\": 3.5 }",
                "3.5",
            ),
        ];

        for (expected_key, contents, expected_value) in cases {
            let file = write_config(CONFIG_FILE_EXTENSION, contents);
            match ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap()) {
                Err(DoubletError::ConfigFileInvalidValue(_, key, value)) => {
                    assert_eq!(key, expected_key);
                    assert_eq!(value, expected_value);
                }
                other => panic!("expected ConfigFileInvalidValue for {contents}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_config_file_null_value() {
        let file = write_config(CONFIG_FILE_EXTENSION, "{ \"max-expansions\": null }");
        let result = ConfigurationFileDetails::new_from_file(file.path().to_str().unwrap());
        assert!(matches!(
            result,
            Err(DoubletError::ConfigFileInvalidValue(_, _, _))
        ));
    }

    #[test]
    fn test_config_file_write_and_reload() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("nested").join("search.dblt");
        let path_str = path.to_str().unwrap();

        let details = ConfigurationFileDetails {
            dictionary: Some(PathBuf::from("words.txt")),
            strategy: MutationStrategy::Insertion,
            ladder: true,
            discord: true,
            max_expansions: Some(25),
            rearrangement_limit: None,
        };
        details.write_to_file_as_json(path_str).unwrap();

        let reloaded = ConfigurationFileDetails::new_from_file(path_str).unwrap();
        assert_eq!(reloaded, details);
    }

    #[test]
    fn test_config_file_write_to_stream() {
        let mut buffer: Vec<u8> = Vec::new();
        ConfigurationFileDetails::default()
            .write_to_stream_as_json(&mut buffer)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.get_str_for_key(STRATEGY_KEY), Some("Doublet"));
        assert_eq!(
            value.get_int_for_key(MAX_REARRANGEMENT_LENGTH_KEY),
            Some(DEFAULT_REARRANGEMENT_LIMIT as i64)
        );
        assert!(!value.contains_key(DICTIONARY_KEY));
    }
}

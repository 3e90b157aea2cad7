//! The `dictionary` module contains [`Dictionary`], the read-only set of words that may appear
//! in the middle of a path.

use crate::error::DoubletError;
use crate::word::{is_alphabetic_word, normalize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The set of valid words.  All words are stored in their normalized (uppercase) form.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create a new, empty, dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashSet::new(),
        }
    }

    /// Create a dictionary from a sequence of words.  Words that contain anything other than
    /// letters are skipped.
    ///
    /// # Arguments
    ///
    /// * `words` - The words to add to the dictionary.
    pub fn from_words<I, S>(words: I) -> Dictionary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Load a newline delimited word list from the file at `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - The location of the word list in the file system.
    ///
    /// # Errors
    ///
    /// Returns [`DoubletError::InvalidDictionary`] if the file cannot be opened or read.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DoubletError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DoubletError::InvalidDictionary(path.display().to_string(), e.to_string())
        })?;

        let dictionary = Dictionary::load_from_reader(BufReader::new(file)).map_err(|e| {
            DoubletError::InvalidDictionary(path.display().to_string(), e.to_string())
        })?;

        log::info!(
            "Loaded {} words from dictionary {}",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Load a newline delimited word list from `reader`.  Each line is trimmed and uppercased;
    /// empty lines and lines containing non-alphabetic characters are skipped.
    ///
    /// # Arguments
    ///
    /// * `reader` - The source of the word list.
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Dictionary, DoubletError> {
        let mut dictionary = Dictionary::new();
        for line in reader.lines() {
            dictionary.insert(&line?);
        }
        Ok(dictionary)
    }

    /// Add `word` to the dictionary.  Return true if the word was valid and not already present.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to add.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if !is_alphabetic_word(word) {
            return false;
        }
        self.words.insert(normalize(word))
    }

    /// Return true if the dictionary contains `word`.  The caller must pass a normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Return the number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Return true if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_dictionary_load_from_reader_filters_and_normalizes() {
        let text = "cat\nCOT\n\n  dog  \ndon't\nx-ray\nabc1\nCat\n";
        let dictionary = Dictionary::load_from_reader(Cursor::new(text)).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("COT"));
        assert!(dictionary.contains("DOG"));
        assert!(!dictionary.contains("cat"));
        assert!(!dictionary.contains("DON'T"));
    }

    #[test]
    fn test_dictionary_from_words() {
        let dictionary = Dictionary::from_words(["a", "at", "cat", "at"]);
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("AT"));
    }

    #[test]
    fn test_dictionary_insert_reports_new_words() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.is_empty());
        assert!(dictionary.insert("word"));
        assert!(!dictionary.insert("WORD"));
        assert!(!dictionary.insert("two words"));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn test_dictionary_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lead\nload\ngoad\ngold").unwrap();

        let dictionary = Dictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.contains("GOLD"));
    }

    #[test]
    fn test_dictionary_load_from_missing_file() {
        let result = Dictionary::load_from_file("/this/path/does/not/exist/words.txt");
        assert!(matches!(result, Err(DoubletError::InvalidDictionary(_, _))));
    }
}

//! The `path_printer` module writes a found path in the numbered, one word per line format.

use doublet_lib::word::normalize;
use std::io::Write;

/// Write `path` to `stream`, one `"{line}. {word}"` line per word.
///
/// When `discord` is true, every word except the first line and the end word is wrapped in
/// `||` spoiler markup so the intermediate steps stay hidden until revealed.
///
/// # Arguments
///
/// * `stream` - The object that implements the [`Write`] trait.
/// * `path` - The words of the path, start to end.
/// * `end` - The end word the user asked for.
/// * `discord` - True to wrap the hidden words in spoiler markup.
pub fn write_path<W: Write + ?Sized>(
    stream: &mut W,
    path: &[String],
    end: &str,
    discord: bool,
) -> std::io::Result<()> {
    let end = normalize(end);

    for (index, word) in path.iter().enumerate() {
        let line = index + 1;
        if discord && line != 1 && *word != end {
            writeln!(stream, "{line}. ||{word}||")?;
        } else {
            writeln!(stream, "{line}. {word}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn render(path: &[String], end: &str, discord: bool) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        write_path(&mut buffer, path, end, discord).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_write_path_plain() {
        let text = render(&path(&["CAT", "COT", "COG", "DOG"]), "dog", false);
        assert_eq!(text, "1. CAT\n2. COT\n3. COG\n4. DOG\n");
    }

    #[test]
    fn test_write_path_discord() {
        let text = render(&path(&["CAT", "COT", "COG", "DOG"]), "dog", true);
        assert_eq!(text, "1. CAT\n2. ||COT||\n3. ||COG||\n4. DOG\n");
    }

    #[test]
    fn test_write_path_single_word() {
        assert_eq!(render(&path(&["CAT"]), "cat", true), "1. CAT\n");
    }
}

//! The `strategies_info` module provides code to output the list of supported mutation
//! strategies and descriptions of the supported strategies.

use crate::DoubletCLArgs;
use doublet_lib::mutation::{all_strategy_descriptions, get_all_mutation_strategies};
use std::io::{stdout, Write};

/// Function that displays either/or the mutation strategy documentation.
pub fn display_strategies_info(params: &DoubletCLArgs) -> std::io::Result<()> {
    let width = get_terminal_width();
    let mut stream = stdout().lock();

    if params.list_strategies {
        // If we list the short version of the strategies do not display the longer
        // descriptions, even if params.describe_strategies is true.
        return write_strategy_list(&mut stream, width);
    }

    if params.describe_strategies {
        write_strategy_descriptions(&mut stream, width)?;
    }

    Ok(())
}

fn get_terminal_width() -> usize {
    match termsize::get() {
        Some(size) => size.cols as usize,
        // We get to this case if the tool runs in a non-terminal window (ie as part of a script).
        None => 80,
    }
}

/// Write `text` to `stream`, breaking lines on whitespace so that no line is wider than `width`.
/// Every line after the first is indented by `indent` columns; the caller has already written the
/// first `indent` columns of the first line.
fn write_flowable_text<W: Write>(
    stream: &mut W,
    text: &str,
    indent: usize,
    width: usize,
) -> std::io::Result<()> {
    // Always leave room for at least a short word after the indent.
    let width = width.max(indent + 20);
    let mut column = indent;

    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            if column + 1 + word.len() > width {
                writeln!(stream)?;
                write!(stream, "{:indent$}", "")?;
                column = indent;
            } else {
                write!(stream, " ")?;
                column += 1;
            }
        }
        write!(stream, "{word}")?;
        column += word.len();
    }

    Ok(())
}

/// Write the short list of the strategy names and the summary text for each strategy.
fn write_strategy_list<W: Write>(stream: &mut W, width: usize) -> std::io::Result<()> {
    let descriptions = all_strategy_descriptions();
    let strategies = get_all_mutation_strategies();

    let name_width = strategies
        .iter()
        .map(|s| s.to_string().len())
        .max()
        .unwrap_or(0);

    for (i, strategy) in strategies.iter().enumerate() {
        let name = strategy.to_string();
        write!(stream, "{name:name_width$} ")?;
        write_flowable_text(
            stream,
            descriptions[strategy].summary,
            name_width + 1,
            width,
        )?;
        writeln!(stream)?;

        if i < strategies.len() - 1 {
            writeln!(stream)?;
        }
    }

    Ok(())
}

/// Write the detailed description of each strategy.
fn write_strategy_descriptions<W: Write>(stream: &mut W, width: usize) -> std::io::Result<()> {
    let descriptions = all_strategy_descriptions();
    let strategies = get_all_mutation_strategies();

    let categories = ["Summary:", "Details:", "Aliases:", "Examples:"];
    let category_width = categories.iter().map(|c| c.len()).max().unwrap_or(0);
    let indent = 2 + category_width + 1;

    for (i, strategy) in strategies.iter().enumerate() {
        let description = &descriptions[strategy];
        writeln!(stream, "{strategy}")?;

        let aliases = description.aliases.join(", ");
        let sections = [
            (categories[0], description.summary),
            (categories[1], description.extra_details),
            (categories[2], aliases.as_str()),
            (categories[3], description.examples),
        ];

        for (category, text) in sections {
            if text.is_empty() {
                continue;
            }
            write!(stream, "  {category:category_width$} ")?;
            write_flowable_text(stream, text, indent, width)?;
            writeln!(stream)?;
        }

        if i < strategies.len() - 1 {
            writeln!(stream)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(text: &str, indent: usize, width: usize) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        write_flowable_text(&mut buffer, text, indent, width).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_flowable_text_wraps_with_indent() {
        let text = flow("one two three four five six seven", 4, 24);
        assert_eq!(text, "one two three four\n    five six seven");
        for line in text.lines() {
            assert!(line.len() <= 24);
        }
    }

    #[test]
    fn test_flowable_text_short() {
        assert_eq!(flow("short text", 0, 80), "short text");
    }

    #[test]
    fn test_strategy_list_names_every_strategy() {
        let mut buffer: Vec<u8> = Vec::new();
        write_strategy_list(&mut buffer, 80).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        for strategy in get_all_mutation_strategies() {
            assert!(text.contains(&strategy.to_string()));
        }
        assert!(text.starts_with("Deletion      Remove one letter"));
    }

    #[test]
    fn test_strategy_descriptions_include_aliases() {
        let mut buffer: Vec<u8> = Vec::new();
        write_strategy_descriptions(&mut buffer, 100).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Substitution\n  Summary:"));
        assert!(text.contains("Aliases:  swap, ladder"));
        assert!(text.contains("Aliases:  scramble"));
    }
}

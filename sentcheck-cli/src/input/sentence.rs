//! Sentences collected from the command line, files or stdin

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a sentence came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentenceOrigin {
    /// Positional command-line argument (1-based)
    Argument(usize),
    /// Line of an input file (1-based)
    File { path: PathBuf, line: usize },
    /// Line of standard input (1-based)
    Stdin(usize),
}

impl fmt::Display for SentenceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceOrigin::Argument(index) => write!(f, "arg:{index}"),
            SentenceOrigin::File { path, line } => write!(f, "{}:{line}", path.display()),
            SentenceOrigin::Stdin(line) => write!(f, "stdin:{line}"),
        }
    }
}

/// A single sentence to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Where the sentence was read from
    pub origin: SentenceOrigin,
    /// Raw sentence text, without its line terminator
    pub text: String,
}

impl Sentence {
    /// Collect positional arguments as sentences
    pub fn from_args(args: &[String]) -> Vec<Sentence> {
        args.iter()
            .enumerate()
            .map(|(i, text)| Sentence {
                origin: SentenceOrigin::Argument(i + 1),
                text: text.clone(),
            })
            .collect()
    }

    /// Split file content into one sentence per non-empty line
    pub fn from_file_content(path: &Path, content: &str) -> Vec<Sentence> {
        non_empty_lines(content)
            .map(|(line, text)| Sentence {
                origin: SentenceOrigin::File {
                    path: path.to_path_buf(),
                    line,
                },
                text: text.to_string(),
            })
            .collect()
    }

    /// Split stdin content into one sentence per non-empty line
    pub fn from_stdin_content(content: &str) -> Vec<Sentence> {
        non_empty_lines(content)
            .map(|(line, text)| Sentence {
                origin: SentenceOrigin::Stdin(line),
                text: text.to_string(),
            })
            .collect()
    }
}

/// Non-empty lines with 1-based line numbers
///
/// Lines are otherwise kept verbatim, so whitespace-only lines are checked
/// and trailing spaces still count against the ends-with-period rule.
fn non_empty_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| (i + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args() {
        let sentences = Sentence::from_args(&["A.".to_string(), "b".to_string()]);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].origin, SentenceOrigin::Argument(2));
        assert_eq!(sentences[1].text, "b");
    }

    #[test]
    fn test_from_file_content_skips_empty_lines() {
        let content = "First line.\n\nSecond line.\r\n";
        let sentences = Sentence::from_file_content(Path::new("in.txt"), content);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "First line.");
        assert_eq!(sentences[1].text, "Second line.");
        assert_eq!(sentences[1].origin.to_string(), "in.txt:3");
    }

    #[test]
    fn test_whitespace_only_lines_are_sentences() {
        let sentences = Sentence::from_stdin_content("The dog.\n   \n\t\n");

        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[1].text, "   ");
        assert_eq!(sentences[2].text, "\t");
        assert_eq!(sentences[2].origin.to_string(), "stdin:3");
    }

    #[test]
    fn test_trailing_whitespace_is_kept() {
        let sentences = Sentence::from_stdin_content("Spaced out. \n");
        assert_eq!(sentences[0].text, "Spaced out. ");
        assert_eq!(sentences[0].origin.to_string(), "stdin:1");
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(SentenceOrigin::Argument(3).to_string(), "arg:3");
        assert_eq!(SentenceOrigin::Stdin(7).to_string(), "stdin:7");
    }
}

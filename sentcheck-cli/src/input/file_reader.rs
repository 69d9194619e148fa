//! File reading utilities

use super::Sentence;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file as one sentence per non-blank line
    pub fn read_sentences(path: &Path) -> Result<Vec<Sentence>> {
        let content = Self::read_text(path)?;
        Ok(Sentence::from_file_content(path, &content))
    }

    /// Read all of a reader (normally stdin) as one sentence per non-blank line
    pub fn read_stdin_sentences(mut reader: impl Read) -> Result<Vec<Sentence>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;

        Ok(Sentence::from_stdin_content(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello world.\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.txt");

        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_read_sentences() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sentences.txt");

        fs::write(&file_path, "Élan is a word.\n\nthe dog.\n").unwrap();

        let sentences = FileReader::read_sentences(&file_path).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Élan is a word.");
        assert_eq!(sentences[1].text, "the dog.");
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let sentences = FileReader::read_sentences(&file_path).unwrap();
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_read_stdin_sentences() {
        let input = "One.\nTwo.\n".as_bytes();
        let sentences = FileReader::read_stdin_sentences(input).unwrap();

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].origin.to_string(), "stdin:2");
    }
}

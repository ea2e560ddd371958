//! Small file helpers used by the loaders.

use std::path::Path;

use crate::{Error, Result};

/// Reads the whole file at `path` as UTF-8 text.
pub fn file_content(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Returns the final extension of `path` without the leading dot.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        let input = Path::new("/home/user/some/funny/path/some-funny-filename.ext");
        assert_eq!(file_extension(input), Some("ext"));
        assert_eq!(file_extension(Path::new("archive.tar.gz")), Some("gz"));
        assert_eq!(file_extension(Path::new("Makefile")), None);
    }

    #[test]
    fn test_file_content_missing_file() {
        let path = std::env::temp_dir().join("ogf-io-does-not-exist.txt");
        let err = file_content(&path).unwrap_err();
        assert!(err.to_string().contains("ogf-io-does-not-exist.txt"));
    }

    #[test]
    fn test_file_content_reads_text() {
        let path =
            std::env::temp_dir().join(format!("ogf-io-{}-content.txt", std::process::id()));
        std::fs::write(&path, "line one\nline two\n").unwrap();
        let content = file_content(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(content, "line one\nline two\n");
    }
}

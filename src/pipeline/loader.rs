//! Document loading
//!
//! Text extraction from PDFs and other binary formats happens outside this
//! crate; implement [`DocumentLoader`] to plug an extractor in.
//! [`TextFileLoader`] covers documents that are already plain text.

use std::io::ErrorKind;
use std::path::Path;

use crate::errors::{Error, Result};
use crate::types::Document;

/// Produces the raw text of a document
pub trait DocumentLoader {
    /// Fails with [`Error::NotFound`] when the document does not exist and
    /// [`Error::Extraction`] when its text cannot be read
    fn load(&self, path: &Path) -> Result<Document>;
}

/// Loads UTF-8 text files
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileLoader;

impl DocumentLoader for TextFileLoader {
    fn load(&self, path: &Path) -> Result<Document> {
        match std::fs::read(path) {
            Ok(bytes) => String::from_utf8(bytes)
                .map(Document::new)
                .map_err(|e| Error::Extraction {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(Error::NotFound(path.to_path_buf())),
            Err(e) => Err(Error::Extraction {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Momentum works.\n12\n").unwrap();

        let document = TextFileLoader.load(file.path()).unwrap();
        assert_eq!(document.text, "Momentum works.\n12\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = TextFileLoader
            .load(Path::new("/nonexistent/paper.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_invalid_utf8_is_extraction_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = TextFileLoader.load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
    }
}

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::compare::Document;
use crate::diagnostics::warning;
use crate::ir::{DocumentSummary, Warning, WarningKind};

pub struct LoadedEssay {
    pub document: Document,
    pub summary: DocumentSummary,
}

/// Reads an essay from disk. A missing or unreadable file becomes an empty
/// document plus a warning; it never aborts the comparison.
pub fn load_essay(path: &Path, warnings: &mut Vec<Warning>) -> LoadedEssay {
    let text = read_text(path, warnings);
    let document = Document::from_text(&text);
    if document.is_empty() && !text.is_empty() {
        warnings.push(warning(
            WarningKind::EmptyDocument,
            format!("{} contains no words", path.display()),
        ));
    }
    let summary = DocumentSummary {
        path: path.to_path_buf(),
        tokens: document.token_count,
        vocabulary: document.vocabulary.len(),
    };
    LoadedEssay { document, summary }
}

fn read_text(path: &Path, warnings: &mut Vec<Warning>) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            let message = if err.kind() == ErrorKind::NotFound {
                format!("essay not found: {}", path.display())
            } else {
                format!("failed to read {}: {err}", path.display())
            };
            warn!(path = %path.display(), error = %err, "treating essay as empty");
            warnings.push(warning(WarningKind::MissingInput, message));
            return String::new();
        }
    };

    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), "essay is not valid UTF-8; decoding lossily");
            warnings.push(warning(
                WarningKind::InvalidUtf8,
                format!("{} is not valid UTF-8; invalid bytes replaced", path.display()),
            ));
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_becomes_empty_document_with_warning() {
        let tmp = TempDir::new().unwrap();
        let mut warnings = Vec::new();
        let loaded = load_essay(&tmp.path().join("absent.txt"), &mut warnings);
        assert!(loaded.document.is_empty());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::MissingInput);
    }

    #[test]
    fn punctuation_only_file_warns_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dots.txt");
        fs::write(&path, "... !!!\n").unwrap();
        let mut warnings = Vec::new();
        let loaded = load_essay(&path, &mut warnings);
        assert!(loaded.document.is_empty());
        assert_eq!(warnings[0].kind, WarningKind::EmptyDocument);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9 bar bar").unwrap();
        let mut warnings = Vec::new();
        let loaded = load_essay(&path, &mut warnings);
        assert_eq!(loaded.document.frequencies.count("bar"), 2);
        assert_eq!(loaded.summary.tokens, 3);
        assert_eq!(warnings[0].kind, WarningKind::InvalidUtf8);
    }
}

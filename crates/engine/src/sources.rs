// crates/engine/src/sources.rs
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

/// Operand that selects standard input, both as a source and as a
/// source-list file.
pub const STDIN_TOKEN: &str = "-";

/// One resolved input, in the order it was supplied. Consumed exactly once
/// by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    Stdin,
    File(PathBuf),
    /// The token named a path that does not exist.
    NotFound(String),
    /// The token named a directory.
    Directory(String),
}

impl SourceDescriptor {
    pub fn classify(token: &str) -> Self {
        if token == STDIN_TOKEN {
            return Self::Stdin;
        }
        let path = Path::new(token);
        if !path.exists() {
            Self::NotFound(token.to_string())
        } else if path.is_dir() {
            Self::Directory(token.to_string())
        } else {
            Self::File(PathBuf::from(token))
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => STDIN_TOKEN.to_string(),
            Self::File(path) => path.display().to_string(),
            Self::NotFound(token) | Self::Directory(token) => token.clone(),
        }
    }
}

/// Split source-list bytes on NUL, dropping empty segments (consecutive
/// NULs and a trailing terminator). Embedded newlines stay part of a token.
pub fn split_source_list(data: &[u8]) -> Vec<String> {
    data.split(|b| *b == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect()
}

/// Read source tokens from a NUL-delimited list file, or from stdin when the
/// path is `-`.
///
/// A missing or directory list file is classified up front but the read is
/// still attempted; its failure is what aborts the invocation, carrying the
/// classification in the error.
pub fn list_tokens(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str() == STDIN_TOKEN {
        let mut data = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut data)
            .map_err(|source| EngineError::ManifestRead {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(split_source_list(&data));
    }

    let missing = !path.exists();
    let is_dir = path.is_dir();

    match std::fs::read(path) {
        Ok(data) => Ok(split_source_list(&data)),
        Err(_) if missing => Err(EngineError::ManifestNotFound {
            path: path.to_path_buf(),
        }),
        Err(_) if is_dir => Err(EngineError::ManifestIsDirectory {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(EngineError::ManifestRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Turn operands (or the source-list file) into ordered descriptors.
/// Ordering mirrors the input token order exactly.
pub fn resolve(tokens: &[String], sources_from: Option<&Path>) -> Result<Vec<SourceDescriptor>> {
    let tokens: Vec<String> = match sources_from {
        Some(path) => {
            if !tokens.is_empty() {
                return Err(EngineError::ConflictingInputs);
            }
            list_tokens(path)?
        }
        None => tokens.to_vec(),
    };

    Ok(tokens.iter().map(|t| SourceDescriptor::classify(t)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn splits_on_nul_and_drops_empty_segments() {
        assert_eq!(split_source_list(b"a\0b\0\0c\0"), vec!["a", "b", "c"]);
    }

    #[test]
    fn embedded_newlines_stay_inside_tokens() {
        assert_eq!(split_source_list(b"a\nb\0c"), vec!["a\nb", "c"]);
    }

    #[test]
    fn empty_list_resolves_to_no_tokens() {
        assert!(split_source_list(b"").is_empty());
        assert!(split_source_list(b"\0\0").is_empty());
    }

    #[test]
    fn classify_stdin_token() {
        assert_eq!(SourceDescriptor::classify("-"), SourceDescriptor::Stdin);
    }

    #[test]
    fn classify_missing_and_directory() {
        let dir = tempdir().unwrap();
        let dir_token = dir.path().display().to_string();

        assert_eq!(
            SourceDescriptor::classify("no/such/operand"),
            SourceDescriptor::NotFound("no/such/operand".to_string())
        );
        assert_eq!(
            SourceDescriptor::classify(&dir_token),
            SourceDescriptor::Directory(dir_token)
        );
    }

    #[test]
    fn list_tokens_reads_nul_delimited_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"first\0second\0").unwrap();

        let tokens = list_tokens(file.path()).unwrap();
        assert_eq!(tokens, vec!["first", "second"]);
    }

    #[test]
    fn missing_list_file_is_fatal() {
        let err = list_tokens(Path::new("no/such/list")).unwrap_err();
        assert!(matches!(err, EngineError::ManifestNotFound { .. }));
        assert!(err.to_string().contains("cannot open"));
    }

    #[test]
    fn directory_list_file_is_fatal() {
        let dir = tempdir().unwrap();
        let err = list_tokens(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::ManifestIsDirectory { .. }));
        assert!(err.to_string().contains("Is a directory"));
    }

    #[test]
    fn operands_conflict_with_list_file() {
        let file = NamedTempFile::new().unwrap();
        let err = resolve(&["x".to_string()], Some(file.path())).unwrap_err();
        assert!(matches!(err, EngineError::ConflictingInputs));
    }

    #[test]
    fn resolution_preserves_token_order() {
        let file = NamedTempFile::new().unwrap();
        let tokens = vec![
            "missing-one".to_string(),
            "-".to_string(),
            file.path().display().to_string(),
        ];

        let descriptors = resolve(&tokens, None).unwrap();
        assert_eq!(descriptors.len(), 3);
        assert!(matches!(descriptors[0], SourceDescriptor::NotFound(_)));
        assert_eq!(descriptors[1], SourceDescriptor::Stdin);
        assert!(matches!(descriptors[2], SourceDescriptor::File(_)));
    }
}

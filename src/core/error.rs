//! Error types for GenomeView
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for GenomeView operations
#[derive(Debug, Error)]
pub enum GenomeError {
    /// FASTA content could not be turned into a genome
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Input file not found
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors (permissions, invalid UTF-8, decompression)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal problems with FASTA input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// First non-empty line does not start with '>'
    #[error("invalid or missing FASTA header")]
    MissingHeader,

    /// No A/C/G/T/N residues left once the sequence was cleaned
    #[error("empty or invalid sequence after cleaning")]
    EmptySequence,
}

/// Result type alias for GenomeView operations
pub type Result<T> = std::result::Result<T, GenomeError>;

/// Result type alias for FASTA parsing
pub type FormatResult<T> = std::result::Result<T, FormatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_messages() {
        assert_eq!(
            FormatError::MissingHeader.to_string(),
            "invalid or missing FASTA header"
        );
        assert_eq!(
            FormatError::EmptySequence.to_string(),
            "empty or invalid sequence after cleaning"
        );
    }

    #[test]
    fn test_genome_error_from_format() {
        let err: GenomeError = FormatError::EmptySequence.into();
        assert!(matches!(err, GenomeError::Format(FormatError::EmptySequence)));
        assert!(err.to_string().contains("empty or invalid sequence"));
    }
}

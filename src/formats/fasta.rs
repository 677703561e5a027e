//! FASTA format adapter
//!
//! Extracts the first sequence record from FASTA text. Residues are
//! uppercased and reduced to the `A/C/G/T/N` alphabet; everything else
//! (whitespace, digits, IUPAC ambiguity codes, gaps) is dropped.

use crate::core::{FormatError, FormatResult};

/// How lines after the first record's header are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordMode {
    /// Stop at the next `>` header; later records are ignored
    #[default]
    FirstRecord,
    /// Fold every following line, headers included, into the first record
    /// before cleaning
    Concatenate,
}

/// A parsed FASTA record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header text after `>`, trimmed (may be empty)
    pub header: String,
    /// Cleaned, non-empty residue string
    pub sequence: String,
    /// Number of further `>` records that were not read
    pub skipped_records: usize,
}

/// Keep only `A/C/G/T/N` after uppercasing
///
/// # Examples
/// ```
/// use genome_view::formats::fasta::clean_sequence;
///
/// assert_eq!(clean_sequence("acgt nRY-42"), "ACGTN");
/// assert_eq!(clean_sequence(&clean_sequence("a c g")), "ACG");
/// ```
pub fn clean_sequence(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T' | 'N'))
        .collect()
}

/// Parse the first record of a FASTA document
///
/// Fails with [`FormatError::MissingHeader`] if the first non-empty line is
/// not a `>` header, and with [`FormatError::EmptySequence`] if no residues
/// survive cleaning.
pub fn parse_fasta(text: &str, mode: RecordMode) -> FormatResult<FastaRecord> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = match lines.next() {
        Some(line) if line.starts_with('>') => line[1..].trim().to_string(),
        _ => return Err(FormatError::MissingHeader),
    };

    let mut raw = String::with_capacity(text.len());
    let mut skipped_records = 0;
    for line in lines {
        if line.starts_with('>') {
            match mode {
                RecordMode::FirstRecord => {
                    skipped_records += 1;
                    continue;
                }
                RecordMode::Concatenate => {}
            }
        }
        if skipped_records == 0 {
            raw.push_str(line);
        }
    }

    let sequence = clean_sequence(&raw);
    if sequence.is_empty() {
        return Err(FormatError::EmptySequence);
    }

    Ok(FastaRecord {
        header,
        sequence,
        skipped_records,
    })
}

//! GFF format adapter
//!
//! Lenient GFF3 parsing into normalized [`Feature`]s. GFF uses 1-based
//! closed coordinates, which are kept as-is.
//!
//! Annotation files are often hand-edited, so malformed data rows are
//! dropped rather than failing the whole file. [`FeatureParseStats`]
//! records how many rows were dropped.

use crate::core::{Feature, FeatureType, Strand};
use crate::formats::attributes::name_from_attributes;
use log::debug;
use memchr::memchr;

/// Number of columns in a GFF data row
pub const GFF_COLUMNS: usize = 9;

/// Reasons a GFF row does not yield a feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GffParseError {
    EmptyLine,
    Comment,
    TooFewFields { expected: usize, found: usize },
    InvalidNumber(&'static str, String),
    NonPositiveCoordinate(&'static str, i64),
}

impl std::fmt::Display for GffParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GffParseError::EmptyLine => write!(f, "Empty line"),
            GffParseError::Comment => write!(f, "Comment or directive line"),
            GffParseError::TooFewFields { expected, found } => {
                write!(f, "Too few fields: expected {}, found {}", expected, found)
            }
            GffParseError::InvalidNumber(field, value) => {
                write!(f, "Invalid number in field {}: {}", field, value)
            }
            GffParseError::NonPositiveCoordinate(field, value) => {
                write!(f, "Coordinate in field {} must be >= 1, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for GffParseError {}

/// Zero-copy view of one GFF data row
/// GFF format: seqid, source, type, start, end, score, strand, phase, attributes
pub struct GffRecordView<'a> {
    /// Sequence name (chromosome)
    pub seqid: &'a str,
    /// Source field
    pub source: &'a str,
    /// Raw feature type
    pub feature_type: &'a str,
    /// Start as written (1-based, may exceed `end`)
    pub start: u64,
    /// End as written (1-based, inclusive)
    pub end: u64,
    /// Score field (as string, may be ".")
    pub score: &'a str,
    /// Raw strand column
    pub strand: &'a str,
    /// Phase field
    pub phase: &'a str,
    /// Attributes field
    pub attributes: &'a str,
}

impl<'a> GffRecordView<'a> {
    /// Parse a GFF line
    ///
    /// The line is trimmed first; blank and `#` lines are rejected, as are
    /// rows with fewer than 9 tab-separated fields or with coordinates that
    /// are not integers >= 1.
    pub fn parse(line: &'a str) -> Result<Self, GffParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(GffParseError::EmptyLine);
        }
        if line.starts_with('#') {
            return Err(GffParseError::Comment);
        }

        // Find field boundaries using memchr for tab characters
        let bytes = line.as_bytes();
        let mut fields: Vec<&'a str> = Vec::with_capacity(GFF_COLUMNS);
        let mut pos = 0;
        loop {
            match memchr(b'\t', &bytes[pos..]) {
                Some(tab) => {
                    fields.push(&line[pos..pos + tab]);
                    pos += tab + 1;
                }
                None => {
                    fields.push(&line[pos..]);
                    break;
                }
            }
        }

        if fields.len() < GFF_COLUMNS {
            return Err(GffParseError::TooFewFields {
                expected: GFF_COLUMNS,
                found: fields.len(),
            });
        }

        let start = parse_coordinate(fields[3], "start")?;
        let end = parse_coordinate(fields[4], "end")?;

        Ok(Self {
            seqid: fields[0],
            source: fields[1],
            feature_type: fields[2],
            start,
            end,
            score: fields[5],
            strand: fields[6].trim(),
            phase: fields[7],
            attributes: fields[8],
        })
    }

    /// Normalize into a [`Feature`]
    ///
    /// Inverted coordinates are swapped, the type is mapped onto a track
    /// category, and the strand defaults to `+`.
    pub fn to_feature(&self) -> Feature {
        let (start, end) = if self.end < self.start {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        Feature {
            start,
            end,
            strand: Strand::from_gff(self.strand),
            feature_type: FeatureType::from_gff(self.feature_type),
            name: name_from_attributes(self.attributes),
        }
    }
}

fn parse_coordinate(field: &str, name: &'static str) -> Result<u64, GffParseError> {
    let field = field.trim();
    let value: i64 = field
        .parse()
        .map_err(|_| GffParseError::InvalidNumber(name, field.to_string()))?;
    if value < 1 {
        return Err(GffParseError::NonPositiveCoordinate(name, value));
    }
    Ok(value as u64)
}

/// Row counts from one GFF parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureParseStats {
    /// Data rows seen (not blank, not comment)
    pub total: usize,
    /// Rows that produced a feature
    pub parsed: usize,
    /// Malformed rows dropped
    pub skipped: usize,
    /// Comment and directive lines
    pub comments: usize,
}

/// Parse GFF text into features sorted by `(start, end)`
pub fn parse_features(text: &str) -> Vec<Feature> {
    parse_features_with_stats(text).0
}

/// Parse GFF text, also returning row counts
pub fn parse_features_with_stats(text: &str) -> (Vec<Feature>, FeatureParseStats) {
    let mut stats = FeatureParseStats::default();
    let mut features = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        match GffRecordView::parse(line) {
            Ok(view) => {
                stats.total += 1;
                stats.parsed += 1;
                features.push(view.to_feature());
            }
            Err(GffParseError::EmptyLine) => {}
            Err(GffParseError::Comment) => stats.comments += 1,
            Err(e) => {
                stats.total += 1;
                stats.skipped += 1;
                debug!("Skipping GFF line {}: {}", idx + 1, e);
            }
        }
    }

    // Stable: equal coordinates keep file order
    features.sort_by_key(|f| (f.start, f.end));
    (features, stats)
}

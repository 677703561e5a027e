//! File format adapters
//!
//! Adapters for the text formats a genome is loaded from (FASTA, GFF3).

pub mod attributes;
pub mod fasta;
pub mod gff;

pub use attributes::{name_from_attributes, parse_attributes};
pub use fasta::{clean_sequence, parse_fasta, FastaRecord, RecordMode};
pub use gff::{
    parse_features, parse_features_with_stats, FeatureParseStats, GffParseError, GffRecordView,
};

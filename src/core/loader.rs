//! Genome loading
//!
//! Composes FASTA and GFF parsing into a [`Genome`], either from file
//! paths or from text already in memory.

use crate::core::error::Result;
use crate::core::genome::Genome;
use crate::core::io::read_text;
use crate::formats::fasta::{parse_fasta, RecordMode};
use crate::formats::gff::parse_features_with_stats;
use log::{info, warn};
use std::path::Path;

/// Options controlling how inputs are parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Treatment of FASTA records after the first
    pub record_mode: RecordMode,
}

impl LoadOptions {
    pub fn new(record_mode: RecordMode) -> Self {
        Self { record_mode }
    }
}

/// Load a genome from a FASTA file and an optional GFF file
pub fn load_from_files<F: AsRef<Path>, G: AsRef<Path>>(
    fasta_path: F,
    gff_path: Option<G>,
    options: LoadOptions,
) -> Result<Genome> {
    let fasta = read_text(fasta_path.as_ref())?;
    let gff = match gff_path {
        Some(p) => Some(read_text(p.as_ref())?),
        None => None,
    };
    load_from_content(&fasta, gff.as_deref(), options)
}

/// Load a genome from FASTA text and optional GFF text
///
/// FASTA problems fail the load; GFF rows that cannot be parsed are
/// dropped. An empty GFF string is treated the same as no GFF.
pub fn load_from_content(fasta: &str, gff: Option<&str>, options: LoadOptions) -> Result<Genome> {
    let record = parse_fasta(fasta, options.record_mode)?;
    if record.skipped_records > 0 {
        warn!(
            "FASTA input has {} additional record(s); only '{}' was loaded",
            record.skipped_records, record.header
        );
    }

    let genome = match gff.filter(|text| !text.is_empty()) {
        Some(text) => {
            let (features, stats) = parse_features_with_stats(text);
            if stats.skipped > 0 {
                warn!(
                    "Dropped {} malformed GFF row(s) out of {}",
                    stats.skipped, stats.total
                );
            }
            Genome::new(record.header, record.sequence, features).with_gff_stats(stats)
        }
        None => Genome::new(record.header, record.sequence, Vec::new()),
    };

    info!(
        "Loaded genome '{}': {} bp, {} feature(s)",
        genome.id,
        genome.length(),
        genome.num_genes()
    );
    Ok(genome)
}

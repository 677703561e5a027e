//! GenomeView - genome loading and viewport projection
//!
//! Parses a FASTA sequence and GFF annotations into an in-memory genome
//! model and serves windowed, pixel-mapped views of it for track
//! rendering (pan/zoom across a genome).
//!
//! # Features
//!
//! - Lenient GFF parsing: malformed rows are dropped and counted
//! - Feature types normalized onto gene / mRNA / CDS / regulatory tracks
//! - Interval-indexed viewport queries with clipping and minimum widths
//! - Transparent gzip/bzip2 input
//!
//! # Example
//!
//! ```
//! use genome_view::Session;
//!
//! let mut session = Session::new();
//! let info = session
//!     .load_from_content(">chr1\nACGTN\n", Some("chr1\t.\tgene\t2\t4\t.\t+\t.\tName=foo\n"))
//!     .unwrap();
//! assert_eq!(info.length, 5);
//!
//! let view = session.viewport(0, 5, 100);
//! assert_eq!(view[0].x, 40.0);
//! assert_eq!(view[0].width, 40.0);
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    Feature, FeatureType, FormatError, Genome, GenomeError, GenomeInfo, GenomeStore,
    GenomeSummary, LoadOptions, ProjectedFeature, ProjectionConfig, Result, Session, Strand,
};
pub use formats::{fasta, gff, RecordMode};

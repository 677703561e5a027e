//! Core genome model and query engine
//!
//! This module contains the genome model, the feature interval index,
//! the genome store, viewport projection, and the query session.

mod error;
pub mod genome;
mod index;
pub mod io;
pub mod label;
pub mod loader;
mod session;
mod store;
pub mod viewport;

pub use error::{FormatError, FormatResult, GenomeError, Result};
pub use genome::{
    clamp_range, Feature, FeatureType, Genome, GenomeInfo, GenomeSummary, Strand,
    UNKNOWN_GENOME_ID,
};
pub use index::{FeatureIndex, FeatureInterval};
pub use io::{detect_compression, read_text, CompressionFormat, DEFAULT_BUFFER_SIZE, MMAP_THRESHOLD};
pub use label::sanitize_label;
pub use loader::{load_from_content, load_from_files, LoadOptions};
pub use session::Session;
pub use store::GenomeStore;
pub use viewport::{project, Palette, ProjectedFeature, ProjectionConfig, DEFAULT_MIN_WIDTH};

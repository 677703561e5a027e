//! Query session
//!
//! The operation surface a host (UI bridge, CLI) talks to. A [`Session`]
//! owns the [`GenomeStore`] and remembers which genome is active. Every
//! read targets the active genome and returns an empty value when there is
//! none, or when the active key no longer resolves.

use crate::core::error::Result;
use crate::core::genome::{Feature, Genome, GenomeInfo, GenomeSummary};
use crate::core::loader::{self, LoadOptions};
use crate::core::store::GenomeStore;
use crate::core::viewport::{project, ProjectedFeature, ProjectionConfig};
use crate::formats::gff::FeatureParseStats;
use indexmap::IndexMap;
use log::info;
use std::path::Path;

/// Genome store plus active-genome selection
#[derive(Debug, Default)]
pub struct Session {
    store: GenomeStore,
    active_id: Option<String>,
    options: LoadOptions,
    projection: ProjectionConfig,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with explicit load and projection settings
    pub fn with_config(options: LoadOptions, projection: ProjectionConfig) -> Self {
        Self {
            store: GenomeStore::new(),
            active_id: None,
            options,
            projection,
        }
    }

    /// Load from files, store, and make the new genome active
    ///
    /// On error nothing is stored and the active genome is unchanged.
    pub fn load_from_files<F: AsRef<Path>, G: AsRef<Path>>(
        &mut self,
        fasta_path: F,
        gff_path: Option<G>,
    ) -> Result<GenomeInfo> {
        let genome = loader::load_from_files(fasta_path, gff_path, self.options)?;
        Ok(self.insert(genome))
    }

    /// Load from in-memory text, store, and make the new genome active
    pub fn load_from_content(&mut self, fasta: &str, gff: Option<&str>) -> Result<GenomeInfo> {
        let genome = loader::load_from_content(fasta, gff, self.options)?;
        Ok(self.insert(genome))
    }

    fn insert(&mut self, genome: Genome) -> GenomeInfo {
        let info = genome.info();
        let key = self.store.store(genome, None);
        info!("Active genome is now '{}'", key);
        self.active_id = Some(key);
        info
    }

    /// Select the active genome; false (and no change) if `id` is unknown
    pub fn set_active(&mut self, id: &str) -> bool {
        if self.store.contains(id) {
            self.active_id = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Key of the active genome, if it still resolves
    pub fn active_id(&self) -> Option<&str> {
        self.active_id
            .as_deref()
            .filter(|id| self.store.contains(id))
    }

    fn active(&self) -> Option<&Genome> {
        self.active_id.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn list_genomes(&self) -> IndexMap<String, GenomeSummary> {
        self.store.list()
    }

    pub fn active_info(&self) -> Option<GenomeInfo> {
        self.active().map(Genome::info)
    }

    /// All features of the active genome
    pub fn features(&self) -> &[Feature] {
        self.active().map(Genome::genes).unwrap_or(&[])
    }

    /// Features of the active genome overlapping the closed window
    /// `[start, end]`
    pub fn features_in(&self, start: u64, end: u64) -> Vec<&Feature> {
        match self.active() {
            Some(genome) => genome.features_overlapping(start, end).collect(),
            None => Vec::new(),
        }
    }

    /// Slice of the active sequence over `[start, end)`, clamped
    pub fn sequence_region(&self, start: i64, end: i64) -> &str {
        self.active().map(|g| g.region(start, end)).unwrap_or("")
    }

    /// First feature whose name matches case-insensitively
    ///
    /// Surrounding whitespace in the query is ignored.
    pub fn find_feature_by_name(&self, name: &str) -> Option<&Feature> {
        let query = name.trim().to_lowercase();
        self.features()
            .iter()
            .find(|f| f.name.to_lowercase() == query)
    }

    /// Project the active genome's features into a pixel window
    pub fn viewport(&self, start: i64, end: i64, width: i64) -> Vec<ProjectedFeature> {
        match self.active() {
            Some(genome) => project(genome, start, end, width, &self.projection),
            None => Vec::new(),
        }
    }

    /// GFF row counts for the active genome
    pub fn load_stats(&self) -> Option<FeatureParseStats> {
        self.active().and_then(|g| g.gff_stats().copied())
    }

    /// Remove a genome from the store
    ///
    /// Removing the active genome leaves the active key dangling; reads
    /// then behave as if nothing were active.
    pub fn remove(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn store(&self) -> &GenomeStore {
        &self.store
    }
}

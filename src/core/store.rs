//! In-memory genome registry
//!
//! Genomes are keyed by identifier and kept in insertion order. A key that
//! is already taken gets a numeric suffix (`_2`, `_3`, ...) instead of
//! replacing the existing entry.

use crate::core::genome::{Genome, GenomeSummary};
use indexmap::IndexMap;
use log::debug;

/// Registry of loaded genomes
#[derive(Debug, Default)]
pub struct GenomeStore {
    genomes: IndexMap<String, Genome>,
}

impl GenomeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a genome and return the key it was stored under
    ///
    /// The proposed key is `id` when given and non-empty, otherwise the
    /// genome's own id, otherwise `genome_<N+1>` for a store of size N.
    pub fn store(&mut self, genome: Genome, id: Option<&str>) -> String {
        let proposed = match id.filter(|s| !s.is_empty()) {
            Some(id) => id.to_string(),
            None if !genome.id.is_empty() => genome.id.clone(),
            None => format!("genome_{}", self.genomes.len() + 1),
        };

        let key = self.free_key(proposed);
        debug!("Storing genome '{}' under key '{}'", genome.id, key);
        self.genomes.insert(key.clone(), genome);
        key
    }

    fn free_key(&self, base: String) -> String {
        if !self.genomes.contains_key(&base) {
            return base;
        }
        let mut i = 2u64;
        loop {
            let candidate = format!("{}_{}", base, i);
            if !self.genomes.contains_key(&candidate) {
                return candidate;
            }
            i += 1;
        }
    }

    pub fn get(&self, id: &str) -> Option<&Genome> {
        self.genomes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.genomes.contains_key(id)
    }

    /// Summaries keyed by store key, in insertion order
    pub fn list(&self) -> IndexMap<String, GenomeSummary> {
        self.genomes
            .iter()
            .map(|(key, genome)| (key.clone(), GenomeSummary::from(genome)))
            .collect()
    }

    /// Remove a genome; true iff something was removed
    pub fn remove(&mut self, id: &str) -> bool {
        self.genomes.shift_remove(id).is_some()
    }

    pub fn clear(&mut self) {
        self.genomes.clear();
    }

    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Store keys in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.genomes.keys().map(|s| s.as_str())
    }
}

//! Genome model
//!
//! A loaded genome is a single cleaned sequence plus its normalized,
//! position-sorted feature annotations.

use crate::core::index::FeatureIndex;
use crate::formats::gff::FeatureParseStats;
use serde::Serialize;

/// Strand orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize)]
pub enum Strand {
    #[default]
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl Strand {
    /// Parse a GFF strand column
    ///
    /// Anything other than exactly `+` or `-` (including `.`, `?` and
    /// empty) normalizes to [`Strand::Plus`].
    ///
    /// # Examples
    /// ```
    /// use genome_view::core::Strand;
    /// assert_eq!(Strand::from_gff("-"), Strand::Minus);
    /// assert_eq!(Strand::from_gff("."), Strand::Plus);
    /// ```
    pub fn from_gff(field: &str) -> Self {
        match field {
            "-" => Strand::Minus,
            _ => Strand::Plus,
        }
    }

    /// Convert to char
    pub fn to_char(&self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Normalized feature category
///
/// Raw GFF types are folded onto four rendering tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureType {
    #[serde(rename = "gene")]
    Gene,
    #[serde(rename = "mRNA")]
    MRna,
    #[serde(rename = "CDS")]
    Cds,
    #[serde(rename = "regulatory")]
    Regulatory,
}

impl FeatureType {
    /// Map a raw GFF type column onto a track category
    ///
    /// Matching is case-insensitive. Unknown types land on
    /// [`FeatureType::Regulatory`].
    ///
    /// # Examples
    /// ```
    /// use genome_view::core::FeatureType;
    /// assert_eq!(FeatureType::from_gff("CDS"), FeatureType::Cds);
    /// assert_eq!(FeatureType::from_gff("transcript"), FeatureType::MRna);
    /// assert_eq!(FeatureType::from_gff("tRNA"), FeatureType::Regulatory);
    /// ```
    pub fn from_gff(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "gene" => FeatureType::Gene,
            "cds" => FeatureType::Cds,
            "mrna" | "transcript" => FeatureType::MRna,
            "exon" | "utr" | "five_prime_utr" | "three_prime_utr" | "promoter"
            | "regulatory_region" => FeatureType::Regulatory,
            _ => FeatureType::Regulatory,
        }
    }

    /// Canonical type name
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::Gene => "gene",
            FeatureType::MRna => "mRNA",
            FeatureType::Cds => "CDS",
            FeatureType::Regulatory => "regulatory",
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single annotation on the genome
///
/// Coordinates are 1-based and inclusive, with `1 <= start <= end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub name: String,
}

impl Feature {
    /// Whether the feature touches the closed window `[start, end]`
    #[inline]
    pub fn overlaps(&self, start: u64, end: u64) -> bool {
        !(self.end < start || self.start > end)
    }
}

/// Identifier used when the FASTA header is blank
pub const UNKNOWN_GENOME_ID: &str = "unknown_genome";

/// A loaded genome
pub struct Genome {
    /// Identifier taken from the FASTA header
    pub id: String,
    sequence: String,
    genes: Vec<Feature>,
    index: FeatureIndex,
    gff_stats: Option<FeatureParseStats>,
}

impl Genome {
    /// Build a genome from a cleaned sequence and its features
    ///
    /// Features are sorted by `(start, end)`; the sort is stable so rows
    /// with identical coordinates keep their file order. The sequence is
    /// taken as given: the loader only builds genomes from non-empty
    /// cleaned sequences, direct callers must uphold that themselves.
    pub fn new(id: impl Into<String>, sequence: String, mut genes: Vec<Feature>) -> Self {
        let id = id.into();
        let id = if id.trim().is_empty() {
            UNKNOWN_GENOME_ID.to_string()
        } else {
            id
        };
        genes.sort_by_key(|g| (g.start, g.end));
        let index = FeatureIndex::new(&genes);
        Self {
            id,
            sequence,
            genes,
            index,
            gff_stats: None,
        }
    }

    /// Attach the statistics of the GFF parse that produced the features
    pub fn with_gff_stats(mut self, stats: FeatureParseStats) -> Self {
        self.gff_stats = Some(stats);
        self
    }

    /// Cleaned residue string (A/C/G/T/N only)
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Sequence length, always equal to `sequence().len()`
    pub fn length(&self) -> u64 {
        self.sequence.len() as u64
    }

    /// Features sorted by `(start, end)`
    pub fn genes(&self) -> &[Feature] {
        &self.genes
    }

    pub fn num_genes(&self) -> usize {
        self.genes.len()
    }

    /// Row counts from the GFF parse, if an annotation file was supplied
    pub fn gff_stats(&self) -> Option<&FeatureParseStats> {
        self.gff_stats.as_ref()
    }

    /// Features overlapping the closed window `[start, end]`, in stored order
    pub fn features_overlapping(&self, start: u64, end: u64) -> impl Iterator<Item = &Feature> {
        self.index
            .query(start, end)
            .into_iter()
            .map(move |i| &self.genes[i])
    }

    /// Substring of the sequence over the 0-based half-open range
    /// `[start, end)`, clamped to the sequence
    ///
    /// Returns `""` when the clamped range is empty or inverted.
    pub fn region(&self, start: i64, end: i64) -> &str {
        let (start, end) = clamp_range(start, end, self.length());
        if end <= start {
            return "";
        }
        // Sequence is ASCII, so byte offsets are char offsets
        &self.sequence[start as usize..end as usize]
    }

    /// GC fraction over non-N residues (0.0 when there are none)
    pub fn gc_content(&self) -> f64 {
        let mut gc = 0usize;
        let mut called = 0usize;
        for b in self.sequence.bytes() {
            match b {
                b'G' | b'C' => {
                    gc += 1;
                    called += 1;
                }
                b'A' | b'T' => called += 1,
                _ => {}
            }
        }
        if called == 0 {
            0.0
        } else {
            gc as f64 / called as f64
        }
    }

    /// Summary with GFF presence flag
    pub fn info(&self) -> GenomeInfo {
        GenomeInfo {
            id: self.id.clone(),
            length: self.length(),
            num_genes: self.num_genes(),
            has_gff: !self.genes.is_empty(),
        }
    }
}

impl std::fmt::Debug for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Genome")
            .field("id", &self.id)
            .field("length", &self.length())
            .field("num_genes", &self.genes.len())
            .finish()
    }
}

/// Clamp a requested range to `[0, length]`
pub fn clamp_range(start: i64, end: i64, length: u64) -> (u64, u64) {
    let clamp = |v: i64| -> u64 { (v.max(0) as u64).min(length) };
    (clamp(start), clamp(end))
}

/// Genome summary returned by load and info queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomeInfo {
    pub id: String,
    pub length: u64,
    pub num_genes: usize,
    pub has_gff: bool,
}

/// Genome summary used for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomeSummary {
    pub id: String,
    pub length: u64,
    pub num_genes: usize,
}

impl From<&Genome> for GenomeSummary {
    fn from(genome: &Genome) -> Self {
        Self {
            id: genome.id.clone(),
            length: genome.length(),
            num_genes: genome.num_genes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(start: u64, end: u64, name: &str) -> Feature {
        Feature {
            start,
            end,
            strand: Strand::Plus,
            feature_type: FeatureType::Gene,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_strand_from_gff() {
        assert_eq!(Strand::from_gff("+"), Strand::Plus);
        assert_eq!(Strand::from_gff("-"), Strand::Minus);
        assert_eq!(Strand::from_gff("."), Strand::Plus);
        assert_eq!(Strand::from_gff(""), Strand::Plus);
        assert_eq!(Strand::from_gff("--"), Strand::Plus);
    }

    #[test]
    fn test_feature_type_table() {
        assert_eq!(FeatureType::from_gff("gene"), FeatureType::Gene);
        assert_eq!(FeatureType::from_gff("Gene"), FeatureType::Gene);
        assert_eq!(FeatureType::from_gff("mRNA"), FeatureType::MRna);
        assert_eq!(FeatureType::from_gff("transcript"), FeatureType::MRna);
        assert_eq!(FeatureType::from_gff("cds"), FeatureType::Cds);
        for raw in [
            "exon",
            "UTR",
            "five_prime_UTR",
            "three_prime_utr",
            "promoter",
            "regulatory_region",
            "repeat_region",
        ] {
            assert_eq!(FeatureType::from_gff(raw), FeatureType::Regulatory, "{}", raw);
        }
    }

    #[test]
    fn test_genome_sorts_features_stably() {
        let genome = Genome::new(
            "g",
            "ACGTACGTAC".to_string(),
            vec![
                feature(5, 9, "late"),
                feature(1, 4, "first"),
                feature(1, 4, "second"),
                feature(1, 2, "short"),
            ],
        );
        let names: Vec<&str> = genome.genes().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["short", "first", "second", "late"]);
    }

    #[test]
    fn test_blank_id_becomes_unknown() {
        let genome = Genome::new("  ", "ACGT".to_string(), vec![]);
        assert_eq!(genome.id, UNKNOWN_GENOME_ID);
    }

    #[test]
    fn test_region_clamps() {
        let genome = Genome::new("g", "ACGTN".to_string(), vec![]);
        assert_eq!(genome.region(1, 3), "CG");
        assert_eq!(genome.region(-10, 2), "AC");
        assert_eq!(genome.region(3, 100), "TN");
        assert_eq!(genome.region(3, 3), "");
        assert_eq!(genome.region(4, 2), "");
        assert_eq!(genome.region(50, 60), "");
    }

    #[test]
    fn test_gc_content() {
        let genome = Genome::new("g", "GGCCAATTNN".to_string(), vec![]);
        assert!((genome.gc_content() - 0.5).abs() < 1e-12);

        let all_n = Genome::new("g", "NNNN".to_string(), vec![]);
        assert_eq!(all_n.gc_content(), 0.0);
    }

    #[test]
    fn test_features_overlapping_closed_window() {
        let genome = Genome::new(
            "g",
            "A".repeat(100),
            vec![feature(10, 20, "a"), feature(21, 30, "b"), feature(40, 50, "c")],
        );
        let hits: Vec<&str> = genome
            .features_overlapping(20, 40)
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(hits, vec!["a", "b", "c"]);

        let none: Vec<&Feature> = genome.features_overlapping(31, 39).collect();
        assert!(none.is_empty());
    }

    #[test]
    fn test_info_and_summary() {
        let genome = Genome::new("chr1", "ACGT".to_string(), vec![feature(1, 2, "x")]);
        let info = genome.info();
        assert_eq!(info.length, 4);
        assert_eq!(info.num_genes, 1);
        assert!(info.has_gff);

        let summary = GenomeSummary::from(&genome);
        assert_eq!(summary.id, "chr1");
        assert_eq!(summary.num_genes, 1);
    }
}

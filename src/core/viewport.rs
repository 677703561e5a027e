//! Viewport projection
//!
//! Maps a genomic window onto a fixed pixel width for track rendering:
//! 1. Clamp the window to `[0, length]` and the width to at least 1
//! 2. Select features overlapping the window (closed on both ends)
//! 3. Clip each feature to the window
//! 4. Scale linearly into pixel space, flooring widths so narrow
//!    features stay visible

use crate::core::genome::{clamp_range, Feature, FeatureType, Genome, Strand};
use serde::Serialize;

/// Default minimum rendered width in pixels
pub const DEFAULT_MIN_WIDTH: f64 = 2.0;

/// Fallback colors per feature type
///
/// Renderers are free to override these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub gene: String,
    pub mrna: String,
    pub cds: String,
    pub regulatory: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gene: "#2ecc71".to_string(),
            mrna: "#f1c40f".to_string(),
            cds: "#9b59b6".to_string(),
            regulatory: "#e67e22".to_string(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, feature_type: FeatureType) -> &str {
        match feature_type {
            FeatureType::Gene => &self.gene,
            FeatureType::MRna => &self.mrna,
            FeatureType::Cds => &self.cds,
            FeatureType::Regulatory => &self.regulatory,
        }
    }
}

/// Projection settings
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Rendered widths are never below this many pixels
    pub min_width: f64,
    pub palette: Palette,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            palette: Palette::default(),
        }
    }
}

/// A feature placed in pixel space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedFeature {
    pub x: f64,
    pub width: f64,
    pub name: String,
    pub strand: Strand,
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub color: String,
}

/// Project a genome's features into a `width`-pixel window over
/// `[start, end]`
///
/// Output follows the genome's stored feature order.
pub fn project(
    genome: &Genome,
    start: i64,
    end: i64,
    width: i64,
    config: &ProjectionConfig,
) -> Vec<ProjectedFeature> {
    let (start, end) = clamp_range(start, end, genome.length());
    let width = width.max(1) as f64;

    let hits: Vec<&Feature> = if end >= start {
        genome.features_overlapping(start, end).collect()
    } else {
        genome
            .genes()
            .iter()
            .filter(|f| f.overlaps(start, end))
            .collect()
    };

    hits.into_iter()
        .map(|f| project_feature(f, start, end, width, config))
        .collect()
}

/// Project one feature already known to overlap the window
fn project_feature(
    feature: &Feature,
    start: u64,
    end: u64,
    width: f64,
    config: &ProjectionConfig,
) -> ProjectedFeature {
    // Guards divide-by-zero on empty or inverted windows
    let window_span = end.saturating_sub(start).max(1) as f64;

    let s = feature.start.max(start) as f64;
    let e = feature.end.min(end) as f64;
    let origin = start as f64;

    let x_start = (s - origin) / window_span * width;
    let x_end = (e - origin) / window_span * width;

    ProjectedFeature {
        x: x_start,
        width: (x_end - x_start).max(config.min_width),
        name: feature.name.clone(),
        strand: feature.strand,
        feature_type: feature.feature_type,
        color: config.palette.color_for(feature.feature_type).to_string(),
    }
}

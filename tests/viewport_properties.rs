//! Property-based tests for viewport projection
//!
//! Width floor, pixel bounds, overlap filtering and ordering.

use genome_view::core::{
    project, Feature, FeatureType, Genome, ProjectionConfig, Strand, DEFAULT_MIN_WIDTH,
};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

/// Generate a feature inside a genome of the given length
fn arb_feature(length: u64) -> impl Strategy<Value = Feature> {
    (1..=length, 1..=length, any::<bool>()).prop_map(|(a, b, minus)| Feature {
        start: a.min(b),
        end: a.max(b),
        strand: if minus { Strand::Minus } else { Strand::Plus },
        feature_type: FeatureType::Gene,
        name: format!("f{}_{}", a.min(b), a.max(b)),
    })
}

/// Generate a genome with up to 40 features
fn arb_genome() -> impl Strategy<Value = Genome> {
    (10u64..5000).prop_flat_map(|length| {
        prop::collection::vec(arb_feature(length), 0..40)
            .prop_map(move |features| Genome::new("g", "A".repeat(length as usize), features))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every emitted width is at least the minimum
    #[test]
    fn prop_min_width(
        genome in arb_genome(),
        start in -100i64..6000,
        end in -100i64..6000,
        width in -10i64..2000,
    ) {
        for p in project(&genome, start, end, width, &ProjectionConfig::default()) {
            prop_assert!(p.width >= DEFAULT_MIN_WIDTH);
        }
    }

    /// Property: features start inside the pixel window and end no further
    /// right than the window edge plus the width floor
    #[test]
    fn prop_within_bounds(
        genome in arb_genome(),
        a in 0i64..6000,
        b in 0i64..6000,
        width in 1i64..2000,
    ) {
        let (start, end) = (a.min(b), a.max(b));
        let w = width as f64;
        for p in project(&genome, start, end, width, &ProjectionConfig::default()) {
            prop_assert!(p.x >= -EPS, "x = {}", p.x);
            prop_assert!(p.x <= w + EPS, "x = {}", p.x);
            prop_assert!(p.x + p.width <= w + DEFAULT_MIN_WIDTH + EPS);
        }
    }

    /// Property: exactly the overlapping features are emitted, in stored order
    #[test]
    fn prop_overlap_selection(
        genome in arb_genome(),
        a in 0i64..6000,
        b in 0i64..6000,
    ) {
        let (start, end) = (a.min(b), a.max(b));
        let length = genome.length() as i64;
        let (cs, ce) = (start.clamp(0, length) as u64, end.clamp(0, length) as u64);

        let expected: Vec<&str> = genome
            .genes()
            .iter()
            .filter(|f| !(f.end < cs || f.start > ce))
            .map(|f| f.name.as_str())
            .collect();
        let projected = project(&genome, start, end, 500, &ProjectionConfig::default());
        let got: Vec<&str> = projected.iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(got, expected);
    }
}

#[test]
fn test_zoom_changes_scale_not_selection() {
    let genome = Genome::new(
        "g",
        "A".repeat(1000),
        vec![Feature {
            start: 100,
            end: 200,
            strand: Strand::Plus,
            feature_type: FeatureType::Cds,
            name: "cds".to_string(),
        }],
    );
    let config = ProjectionConfig::default();

    let wide = project(&genome, 0, 1000, 1000, &config);
    assert!((wide[0].x - 100.0).abs() < EPS);
    assert!((wide[0].width - 100.0).abs() < EPS);

    let zoomed = project(&genome, 100, 200, 1000, &config);
    assert!((zoomed[0].x - 0.0).abs() < EPS);
    assert!((zoomed[0].width - 1000.0).abs() < EPS);
    assert_eq!(zoomed[0].color, "#9b59b6");
}

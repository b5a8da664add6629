//! End-to-end resolution against the built-in catalog.
//!
//! Run with:
//!   cargo test -p region-match --test resolve_scenarios

use region_match::{
    distance, normalize, Catalog, RegionMatcher, Resolution, Strategy, METROPOLITAN_REGION,
};

fn matcher() -> RegionMatcher {
    RegionMatcher::new(Catalog::builtin())
}

// ============================================================================
// Normalization and distance properties
// ============================================================================

mod properties {
    use super::*;

    #[test]
    fn test_normalize_is_case_and_accent_insensitive() {
        assert_eq!(normalize("Región"), normalize("region"));
        assert_eq!(normalize("region"), normalize("REGION"));
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Santiago, Chile!"), "santiago chile");
    }

    #[test]
    fn test_normalize_is_idempotent_over_catalog_text() {
        let catalog = Catalog::builtin();
        let mut samples: Vec<String> = catalog.region_names();
        samples.extend(
            catalog
                .aliases()
                .aliases_for(METROPOLITAN_REGION)
                .iter()
                .cloned(),
        );
        for sample in samples {
            let once = normalize(&sample);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_distance_properties() {
        assert_eq!(distance("metropolitana", "metropolitana"), 0);
        assert_eq!(distance("metropolitana", "metropolotana"), 1);
        assert_eq!(
            distance("santiago", "región metropolitana"),
            distance("región metropolitana", "santiago")
        );
    }
}

// ============================================================================
// Resolution scenarios
// ============================================================================

mod scenarios {
    use super::*;

    #[test]
    fn test_official_name_resolves_exactly() {
        let matcher = matcher();
        let resolution = matcher.resolve("Región Metropolitana de Santiago");
        assert_eq!(resolution.entry().map(|e| e.name.as_str()), Some("SAMTEK"));
        assert_eq!(resolution.strategy(), Some(Strategy::Exact));
    }

    #[test]
    fn test_city_name_resolves() {
        let matcher = matcher();
        let resolution = matcher.resolve("santiago");
        assert_eq!(resolution.entry().map(|e| e.name.as_str()), Some("SAMTEK"));
    }

    #[test]
    fn test_typo_resolves_fuzzily() {
        let matcher = matcher();
        let resolution = matcher.resolve("region metropolotana de santiago");
        assert_eq!(resolution.entry().map(|e| e.name.as_str()), Some("SAMTEK"));
        assert_eq!(resolution.strategy(), Some(Strategy::FuzzyKey));
    }

    #[test]
    fn test_initialism_resolves_by_alias() {
        let matcher = matcher();
        let resolution = matcher.resolve("rm");
        assert_eq!(resolution.entry().map(|e| e.name.as_str()), Some("SAMTEK"));
        assert_eq!(resolution.strategy(), Some(Strategy::Alias));
    }

    #[test]
    fn test_unknown_region_is_not_found() {
        let matcher = matcher();
        assert_eq!(matcher.resolve("Valparaíso"), Resolution::NotFound);
    }

    #[test]
    fn test_matched_entry_fields() {
        let matcher = matcher();
        let entry = matcher.resolve("Metropolitana").entry().unwrap();
        assert_eq!(entry.region, METROPOLITAN_REGION);
        assert!(!entry.address.is_empty());
        assert!(!entry.products.is_empty());
        assert_eq!(entry.image_file, "samtek.jpg");
    }
}

// ============================================================================
// Catalogs loaded from JSON
// ============================================================================

mod json_catalog {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "region": "Región de Valparaíso",
            "name": "Costa Service",
            "address": "Av. Brasil 100, Valparaíso",
            "products": "Televisores",
            "imageFile": "costa.jpg",
            "aliases": ["Valpo", "V Región", "Viña del Mar"]
        },
        {
            "region": "Región Metropolitana de Santiago",
            "name": "SAMTEK",
            "address": "Av. Providencia 1550, Providencia, Santiago",
            "products": "Línea blanca",
            "imageFile": "samtek.jpg",
            "aliases": ["RM", "Santiago"]
        }
    ]"#;

    #[test]
    fn test_resolves_across_entries() {
        let matcher = RegionMatcher::new(Catalog::from_json_str(CATALOG).unwrap());

        assert_eq!(matcher.resolve("valparaiso").entry().unwrap().name, "Costa Service");
        assert_eq!(matcher.resolve("Viña del Mar").entry().unwrap().name, "Costa Service");
        assert_eq!(matcher.resolve("RM").entry().unwrap().name, "SAMTEK");
        assert_eq!(matcher.resolve("santiago").entry().unwrap().name, "SAMTEK");
        assert_eq!(matcher.resolve("Magallanes"), Resolution::NotFound);
    }

    #[test]
    fn test_exact_match_wins_over_earlier_entries() {
        let matcher = RegionMatcher::new(Catalog::from_json_str(CATALOG).unwrap());
        let resolution = matcher.resolve("region metropolitana de santiago");
        assert_eq!(resolution.entry().unwrap().name, "SAMTEK");
        assert_eq!(resolution.strategy(), Some(Strategy::Exact));
    }
}

//! Simulated data extraction.
//!
//! A real implementation would parse spreadsheets and documents here. This
//! one fabricates a plausible batch of building objects instead; a fixed seed
//! makes a run reproducible.

use crate::model::{Dimensions, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SOURCE_TYPES: &[&str] = &[
    "Door", "Window", "Wall", "Stair", "Column", "Beam", "Slab", "Roof",
];

const MOCK_MATERIALS: &[&str] = &["Concrete", "Wood", "Glass", "Steel", "Aluminum"];

/// Materials offered to the user when filling a missing material field.
pub const MATERIAL_OPTIONS: &[&str] = &[
    "Concrete", "Wood", "Glass", "Steel", "Aluminum", "Brick", "Stone", "Plastic", "Ceramic",
    "Composite",
];

/// Generates 5-15 mock records with stable 1-based `item-{n}` ids.
///
/// Roughly 30% of records lack dimensions and 50% lack a material, so the
/// later wizard steps always have something to do.
#[must_use]
pub fn extract_records(seed: Option<u64>) -> Vec<Record> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate(&mut rng)
}

fn generate<R: Rng>(rng: &mut R) -> Vec<Record> {
    let count = rng.gen_range(5..=15);

    (1..=count)
        .map(|n| {
            let raw_type = SOURCE_TYPES[rng.gen_range(0..SOURCE_TYPES.len())];

            let dimensions = if rng.gen_bool(0.3) {
                None
            } else {
                Some(Dimensions {
                    width: round2(rng.gen_range(0.5..2.5)),
                    height: round2(rng.gen_range(1.0..4.0)),
                    depth: round2(rng.gen_range(0.1..0.6)),
                })
            };

            let material = if rng.gen_bool(0.5) {
                Some(MOCK_MATERIALS[rng.gen_range(0..MOCK_MATERIALS.len())].to_string())
            } else {
                None
            };

            Record {
                id: format!("item-{n}"),
                name: format!("{raw_type} {n}"),
                raw_type: raw_type.to_string(),
                level: rng.gen_range(1..=5),
                dimensions,
                material,
            }
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    #[test]
    fn batch_size_and_ids_are_within_contract() {
        for seed in 0..20 {
            let records = extract_records(Some(seed));
            assert!((5..=15).contains(&records.len()), "seed {seed}");

            let ids: BTreeSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids.len(), records.len(), "ids must be unique");
            assert_eq!(records[0].id, "item-1");
            assert_eq!(records.last().unwrap().id, format!("item-{}", records.len()));
        }
    }

    #[test]
    fn generated_values_stay_in_range() {
        for seed in 0..20 {
            for record in extract_records(Some(seed)) {
                assert!(SOURCE_TYPES.contains(&record.raw_type.as_str()));
                assert_eq!(record.name, format!("{} {}", record.raw_type, &record.id[5..]));
                assert!((1..=5).contains(&record.level));
                if let Some(dims) = record.dimensions {
                    assert!((0.5..=2.5).contains(&dims.width));
                    assert!((1.0..=4.0).contains(&dims.height));
                    assert!((0.1..=0.6).contains(&dims.depth));
                }
                if let Some(material) = &record.material {
                    assert!(MOCK_MATERIALS.contains(&material.as_str()));
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_batch() {
        assert_eq!(extract_records(Some(42)), extract_records(Some(42)));
    }
}

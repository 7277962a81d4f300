//! Entity suggestion and mapping-confidence heuristics.
//!
//! Both functions are pure and cheap. `suggest` runs once per record at
//! upload time; user overrides of its output are sticky until the workflow
//! resets. `confidence` is evaluated fresh for whatever entity is currently
//! assigned - it is never cached or persisted.

use crate::model::{IfcEntity, Record};

/// Source-type vocabulary recognized by the suggestion lookup.
const TYPE_SUGGESTIONS: &[(&str, IfcEntity)] = &[
    ("door", IfcEntity::Door),
    ("window", IfcEntity::Window),
    ("wall", IfcEntity::Wall),
    ("stair", IfcEntity::Stair),
    ("column", IfcEntity::Column),
    ("beam", IfcEntity::Beam),
    ("slab", IfcEntity::Slab),
    ("roof", IfcEntity::Roof),
];

/// Synonyms that raise confidence to medium when found in a record's
/// name or source type.
const RELATED_TERMS: &[(IfcEntity, &[&str])] = &[
    (IfcEntity::Door, &["entrance", "exit", "doorway"]),
    (IfcEntity::Window, &["glazing", "opening"]),
    (IfcEntity::Wall, &["partition", "divider"]),
    (IfcEntity::Slab, &["floor", "ceiling"]),
    (IfcEntity::Beam, &["girder", "joist"]),
    (IfcEntity::Column, &["pillar", "post"]),
    (IfcEntity::Stair, &["steps", "stairway", "staircase"]),
    (IfcEntity::Roof, &["roofing", "cover", "ceiling"]),
];

/// How strongly a record's attributes support its assigned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Confidence::High => "High confidence",
            Confidence::Medium => "Medium confidence",
            Confidence::Low => "Low confidence",
        }
    }
}

/// Suggests a target entity from a record's free-text source type.
///
/// The lookup is case-insensitive and total: anything outside the eight-word
/// vocabulary maps to the generic `BuildingElement` fallback.
#[must_use]
pub fn suggest(record: &Record) -> IfcEntity {
    let raw = record.raw_type.to_lowercase();
    TYPE_SUGGESTIONS
        .iter()
        .find(|(keyword, _)| *keyword == raw)
        .map_or(IfcEntity::BuildingElement, |(_, entity)| *entity)
}

/// Scores how well `assigned` fits the record.
///
/// High when the source type equals the entity's stripped name exactly;
/// medium on a substring match between name/type and the stripped name, or
/// when one of the entity's synonyms appears; low otherwise.
#[must_use]
pub fn confidence(record: &Record, assigned: IfcEntity) -> Confidence {
    let name = record.name.to_lowercase();
    let raw = record.raw_type.to_lowercase();
    let stripped = assigned.stripped();

    if raw == stripped {
        return Confidence::High;
    }

    if name.contains(stripped) || stripped.contains(raw.as_str()) {
        return Confidence::Medium;
    }

    let related = RELATED_TERMS
        .iter()
        .find(|(entity, _)| *entity == assigned)
        .is_some_and(|(_, terms)| {
            terms
                .iter()
                .any(|term| name.contains(term) || raw.contains(term))
        });
    if related {
        return Confidence::Medium;
    }

    Confidence::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(name: &str, raw_type: &str) -> Record {
        Record {
            id: "item-1".to_string(),
            name: name.to_string(),
            raw_type: raw_type.to_string(),
            level: 1,
            dimensions: None,
            material: None,
        }
    }

    #[test]
    fn suggest_maps_known_types_case_insensitively() {
        assert_eq!(suggest(&record("Door 1", "Door")), IfcEntity::Door);
        assert_eq!(suggest(&record("w", "WINDOW")), IfcEntity::Window);
        assert_eq!(suggest(&record("s", "slab")), IfcEntity::Slab);
        assert_eq!(suggest(&record("r", "RooF")), IfcEntity::Roof);
    }

    #[test]
    fn suggest_is_total_over_unrecognized_types() {
        for raw in ["Pipe", "", "door frame", "🚪", "IFCDoor"] {
            assert_eq!(suggest(&record("x", raw)), IfcEntity::BuildingElement);
        }
    }

    #[test]
    fn exact_type_match_is_high_for_all_eight_categories() {
        for entity in [
            IfcEntity::Door,
            IfcEntity::Window,
            IfcEntity::Wall,
            IfcEntity::Stair,
            IfcEntity::Column,
            IfcEntity::Beam,
            IfcEntity::Slab,
            IfcEntity::Roof,
        ] {
            let raw = entity.stripped();
            assert_eq!(
                confidence(&record("unrelated", raw), entity),
                Confidence::High
            );
        }
    }

    #[test]
    fn name_substring_match_is_medium() {
        let rec = record("Main door north", "Opening element");
        assert_eq!(confidence(&rec, IfcEntity::Door), Confidence::Medium);
    }

    #[test]
    fn type_prefix_of_stripped_name_is_medium() {
        // "window".contains("win")
        let rec = record("Item 7", "Win");
        assert_eq!(confidence(&rec, IfcEntity::Window), Confidence::Medium);
    }

    #[test]
    fn synonym_match_is_medium() {
        assert_eq!(
            confidence(&record("Main entrance", "Opening"), IfcEntity::Door),
            Confidence::Medium
        );
        assert_eq!(
            confidence(&record("Item 3", "Glazing panel"), IfcEntity::Window),
            Confidence::Medium
        );
        assert_eq!(
            confidence(&record("Staircase A", "Vertical access"), IfcEntity::Stair),
            Confidence::Medium
        );
    }

    #[test]
    fn unrelated_assignment_is_low() {
        assert_eq!(
            confidence(&record("Column 4", "Column"), IfcEntity::Door),
            Confidence::Low
        );
    }
}

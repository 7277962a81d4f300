//! Missing-field detection and the field-update merge.

use crate::model::{Dimensions, Field, MissingFieldSet, Record};

/// Returns the record's unresolved fields in emission order.
///
/// When the dimensions structure is absent entirely a single combined
/// `Dimensions` marker is emitted - never alongside the per-axis markers.
/// Zero-valued axes count as missing; so does an empty material string.
#[must_use]
pub fn detect_missing(record: &Record) -> Vec<Field> {
    let mut missing = Vec::new();

    match record.dimensions {
        None => missing.push(Field::Dimensions),
        Some(dims) => {
            if dims.width == 0.0 {
                missing.push(Field::Width);
            }
            if dims.height == 0.0 {
                missing.push(Field::Height);
            }
            if dims.depth == 0.0 {
                missing.push(Field::Depth);
            }
        }
    }

    if record.material.as_deref().map_or(true, str::is_empty) {
        missing.push(Field::Material);
    }

    missing
}

/// Builds the missing-field set for a whole record batch.
///
/// Complete records get no entry at all.
#[must_use]
pub fn detect_all_missing(records: &[Record]) -> MissingFieldSet {
    records
        .iter()
        .filter_map(|record| {
            let missing = detect_missing(record);
            if missing.is_empty() {
                None
            } else {
                Some((record.id.clone(), missing))
            }
        })
        .collect()
}

/// Applies a user edit to one record and shrinks its missing-field entry.
///
/// Axis fields create the dimensions structure on demand (remaining axes
/// default to zero) and parse the value as a float; malformed or NaN input
/// coerces to zero rather than being rejected. The combined `Dimensions`
/// marker is cleared once all three axes hold non-zero values. An entry whose
/// field list empties is removed from the set entirely; no other record's
/// entry is touched. Unknown ids are ignored.
pub fn update_field(
    records: &mut [Record],
    missing: &mut MissingFieldSet,
    id: &str,
    field: Field,
    value: &str,
) {
    let Some(record) = records.iter_mut().find(|r| r.id == id) else {
        return;
    };

    match field {
        Field::Width => set_axis(record, value, |d, v| d.width = v),
        Field::Height => set_axis(record, value, |d, v| d.height = v),
        Field::Depth => set_axis(record, value, |d, v| d.depth = v),
        Field::Material => record.material = Some(value.to_string()),
        // The combined marker has no direct value; it clears via the axes.
        Field::Dimensions => {}
    }

    let dimensions_complete = record
        .dimensions
        .is_some_and(|d| d.width != 0.0 && d.height != 0.0 && d.depth != 0.0);

    if let Some(fields) = missing.get_mut(id) {
        // The combined marker carries no value of its own, so it is never
        // removed by name - only by the axes actually filling up.
        if field != Field::Dimensions {
            fields.retain(|f| *f != field);
        }
        if dimensions_complete {
            fields.retain(|f| *f != Field::Dimensions);
        }
        if fields.is_empty() {
            missing.remove(id);
        }
    }
}

fn set_axis(record: &mut Record, value: &str, write: impl FnOnce(&mut Dimensions, f64)) {
    let dims = record.dimensions.get_or_insert_with(Dimensions::default);
    write(dims, parse_dimension(value));
}

fn parse_dimension(value: &str) -> f64 {
    let parsed = value.trim().parse::<f64>().unwrap_or(0.0);
    if parsed.is_nan() {
        0.0
    } else {
        parsed
    }
}

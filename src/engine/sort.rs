//! Column-sort helper for the data preview table.

use crate::model::Record;
use std::cmp::Ordering;

/// Sortable columns of the preview table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Type,
    Level,
    Material,
}

impl SortColumn {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::Type => "Type",
            SortColumn::Level => "Level",
            SortColumn::Material => "Material",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    const fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }
}

/// Stateful sort toggle: selecting the active column flips direction,
/// selecting a different column restarts ascending on that column.
///
/// Missing values sink to the bottom in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: Direction,
}

impl SortState {
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = Direction::Ascending;
        }
    }

    /// Returns the records ordered by the current column, or in their
    /// original order when no column was selected yet.
    #[must_use]
    pub fn sorted(&self, records: &[Record]) -> Vec<Record> {
        let mut out = records.to_vec();
        if let Some(column) = self.column {
            out.sort_by(|a, b| self.compare(column, a, b));
        }
        out
    }

    fn compare(&self, column: SortColumn, a: &Record, b: &Record) -> Ordering {
        let ordering = match column {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Type => a.raw_type.cmp(&b.raw_type),
            SortColumn::Level => a.level.cmp(&b.level),
            SortColumn::Material => {
                // Missing material sorts after present values regardless of
                // direction, so it is compared before the direction applies.
                match (a.material.as_deref(), b.material.as_deref()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Greater,
                    (Some(_), None) => return Ordering::Less,
                    (Some(x), Some(y)) => x.cmp(y),
                }
            }
        };

        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, name: &str, level: u32, material: Option<&str>) -> Record {
        Record {
            id: id.to_string(),
            name: name.to_string(),
            raw_type: "Wall".to_string(),
            level,
            dimensions: None,
            material: material.map(str::to_string),
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn no_column_keeps_original_order() {
        let records = vec![
            record("b", "B", 2, None),
            record("a", "A", 1, None),
        ];
        let state = SortState::default();
        assert_eq!(ids(&state.sorted(&records)), vec!["b", "a"]);
    }

    #[test]
    fn toggling_same_column_cycles_direction() {
        let records = vec![
            record("a", "Wall 1", 1, None),
            record("b", "Wall 2", 3, None),
            record("c", "Wall 3", 2, None),
        ];
        let mut state = SortState::default();

        state.toggle(SortColumn::Level);
        assert_eq!(ids(&state.sorted(&records)), vec!["a", "c", "b"]);

        state.toggle(SortColumn::Level);
        assert_eq!(state.direction, Direction::Descending);
        assert_eq!(ids(&state.sorted(&records)), vec!["b", "c", "a"]);

        state.toggle(SortColumn::Level);
        assert_eq!(state.direction, Direction::Ascending);
        assert_eq!(ids(&state.sorted(&records)), vec!["a", "c", "b"]);
    }

    #[test]
    fn different_column_restarts_ascending() {
        let records = vec![
            record("a", "Z", 1, None),
            record("b", "A", 2, None),
        ];
        let mut state = SortState::default();

        state.toggle(SortColumn::Level);
        state.toggle(SortColumn::Level);
        assert_eq!(state.direction, Direction::Descending);

        state.toggle(SortColumn::Name);
        assert_eq!(state.column, Some(SortColumn::Name));
        assert_eq!(state.direction, Direction::Ascending);
        assert_eq!(ids(&state.sorted(&records)), vec!["b", "a"]);
    }

    #[test]
    fn missing_material_sinks_in_both_directions() {
        let records = vec![
            record("a", "A", 1, None),
            record("b", "B", 1, Some("Wood")),
            record("c", "C", 1, Some("Concrete")),
        ];
        let mut state = SortState::default();

        state.toggle(SortColumn::Material);
        assert_eq!(ids(&state.sorted(&records)), vec!["c", "b", "a"]);

        state.toggle(SortColumn::Material);
        assert_eq!(ids(&state.sorted(&records)), vec!["b", "c", "a"]);
    }
}

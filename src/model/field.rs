use serde::{Serialize, Serializer};
use std::fmt;

/// A record field that can still require user input.
///
/// `Dimensions` is a single combined marker emitted when the whole structure
/// is absent; it never appears alongside the individual sub-field markers for
/// the same record. Declaration order is the emission order: dimension-related
/// fields first, material last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Dimensions,
    Width,
    Height,
    Depth,
    Material,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Dimensions => "dimensions",
            Field::Width => "width",
            Field::Height => "height",
            Field::Depth => "depth",
            Field::Material => "material",
        }
    }

    /// Whether filling this field goes through the nested dimensions object.
    #[must_use]
    pub const fn is_dimensional(self) -> bool {
        matches!(self, Field::Width | Field::Height | Field::Depth)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

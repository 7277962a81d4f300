use super::{IfcEntity, Record};
use serde::Serialize;

/// Completion status of a processed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ready,
    Incomplete,
}

impl Status {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Status::Ready => "Ready",
            Status::Incomplete => "Incomplete",
        }
    }
}

/// A record frozen at review time with its resolved entity and status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRecord {
    #[serde(flatten)]
    pub record: Record,
    #[serde(rename = "ifcType")]
    pub ifc_type: IfcEntity,
    pub status: Status,
}

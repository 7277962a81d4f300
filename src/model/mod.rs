pub mod entity;
pub mod field;
pub mod processed;
pub mod record;

pub use entity::IfcEntity;
pub use field::Field;
pub use processed::{ProcessedRecord, Status};
pub use record::{Dimensions, Record};

/// Suggested or user-confirmed target entity per record id.
pub type MappingTable = std::collections::BTreeMap<String, IfcEntity>;

/// Unresolved fields per record id. An id with an empty list never persists:
/// the entry is removed entirely once its last field is resolved.
pub type MissingFieldSet = std::collections::BTreeMap<String, Vec<Field>>;

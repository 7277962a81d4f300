pub mod files;
pub mod mock;

pub use files::{mime_type, validate_files};
pub use mock::{extract_records, MATERIAL_OPTIONS};

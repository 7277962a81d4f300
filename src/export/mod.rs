pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;

use std::fs::File;
use std::path::Path;

fn create_output(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })
}

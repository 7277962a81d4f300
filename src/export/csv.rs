use crate::error::ExportError;
use crate::model::ProcessedRecord;
use std::path::Path;

/// Writes the processed record set as CSV. Absent values render as `-`.
pub fn export_csv<P: AsRef<Path>>(
    records: &[ProcessedRecord],
    path: P,
) -> Result<(), ExportError> {
    let file = super::create_output(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "ID",
        "Name",
        "Type",
        "Level",
        "IFC Entity",
        "Status",
        "Material",
        "Width (m)",
        "Height (m)",
        "Depth (m)",
    ])?;

    for processed in records {
        let record = &processed.record;
        let (width, height, depth) = record.dimensions.map_or_else(
            || ("-".to_string(), "-".to_string(), "-".to_string()),
            |d| {
                (
                    format!("{:.2}", d.width),
                    format!("{:.2}", d.height),
                    format!("{:.2}", d.depth),
                )
            },
        );

        writer.write_record([
            record.id.as_str(),
            record.name.as_str(),
            record.raw_type.as_str(),
            &record.level.to_string(),
            processed.ifc_type.label(),
            processed.status.label(),
            record.material.as_deref().unwrap_or("-"),
            &width,
            &height,
            &depth,
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}

use crate::error::ExportError;
use crate::model::ProcessedRecord;
use std::io::Write;
use std::path::Path;

/// Writes the processed record set as pretty-printed JSON.
pub fn export_json<P: AsRef<Path>>(
    records: &[ProcessedRecord],
    path: P,
) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(records)?;

    let mut file = super::create_output(path.as_ref())?;
    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IfcEntity, Record, Status};
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_flattened_records_with_ifc_labels() {
        let records = vec![ProcessedRecord {
            record: Record {
                id: "item-1".to_string(),
                name: "Door 1".to_string(),
                raw_type: "Door".to_string(),
                level: 3,
                dimensions: None,
                material: None,
            },
            ifc_type: IfcEntity::Door,
            status: Status::Incomplete,
        }];

        let json = serde_json::to_value(&records).unwrap();
        let item = &json[0];
        assert_eq!(item["id"], "item-1");
        assert_eq!(item["type"], "Door");
        assert_eq!(item["level"], 3);
        assert_eq!(item["ifcType"], "IFCDoor");
        assert_eq!(item["status"], "incomplete");
        assert_eq!(item["dimensions"], serde_json::Value::Null);
    }
}

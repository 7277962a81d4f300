//! The five-step wizard state machine.
//!
//! A single `Workflow` owns the authoritative record set, mapping table,
//! missing-field set and processed projection. Each forward transition is
//! gated by an explicit completion call from the active step; the current
//! step is the single source of truth for which view renders. Completion
//! calls arriving out of order are ignored.

use crate::engine;
use crate::error::ValidationError;
use crate::extract;
use crate::model::{
    Field, IfcEntity, MappingTable, MissingFieldSet, ProcessedRecord, Record, Status,
};
use std::path::PathBuf;

/// Wizard steps, in order. Linear; the only cycle is `reset` from Review
/// back to Upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Upload,
    Preview,
    Suggest,
    Fill,
    Review,
}

impl Step {
    pub const COUNT: usize = 5;

    pub const ALL: [Step; Step::COUNT] = [
        Step::Upload,
        Step::Preview,
        Step::Suggest,
        Step::Fill,
        Step::Review,
    ];

    /// 1-based step index shown in the step indicator.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Step::Upload => 1,
            Step::Preview => 2,
            Step::Suggest => 3,
            Step::Fill => 4,
            Step::Review => 5,
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Step::Upload => "File Upload",
            Step::Preview => "Data Preview",
            Step::Suggest => "Mapping Suggestions",
            Step::Fill => "Missing Data",
            Step::Review => "Review & Confirm",
        }
    }
}

pub struct Workflow {
    step: Step,
    seed: Option<u64>,
    files: Vec<PathBuf>,
    records: Vec<Record>,
    mappings: MappingTable,
    missing: MissingFieldSet,
    processed: Vec<ProcessedRecord>,
    /// How many records had missing fields right after extraction; the
    /// denominator of the fill-step progress bar.
    initially_missing: usize,
}

impl Workflow {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            step: Step::Upload,
            seed,
            files: Vec::new(),
            records: Vec::new(),
            mappings: MappingTable::new(),
            missing: MissingFieldSet::new(),
            processed: Vec::new(),
            initially_missing: 0,
        }
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub const fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    #[must_use]
    pub const fn missing(&self) -> &MissingFieldSet {
        &self.missing
    }

    #[must_use]
    pub fn processed(&self) -> &[ProcessedRecord] {
        &self.processed
    }

    /// Upload -> Preview. Validates the selection, runs the simulated
    /// extraction and computes the initial suggestions and missing-field
    /// set synchronously.
    ///
    /// # Errors
    ///
    /// Returns the validation error without advancing when the selection is
    /// empty or contains an unsupported file type.
    pub fn complete_upload(&mut self, files: Vec<PathBuf>) -> Result<(), ValidationError> {
        if self.step != Step::Upload {
            return Ok(());
        }

        extract::validate_files(&files)?;
        self.files = files;
        self.ingest(extract::extract_records(self.seed));
        self.step = Step::Preview;
        Ok(())
    }

    fn ingest(&mut self, records: Vec<Record>) {
        self.mappings = records
            .iter()
            .map(|record| (record.id.clone(), engine::suggest(record)))
            .collect();
        self.missing = engine::detect_all_missing(&records);
        self.initially_missing = self.missing.len();
        self.records = records;
    }

    /// Preview -> Suggest.
    pub fn complete_preview(&mut self) {
        if self.step == Step::Preview {
            self.step = Step::Suggest;
        }
    }

    /// Suggest -> Fill, storing the (possibly user-edited) mapping table.
    /// Overrides are sticky: nothing recomputes them until `reset`.
    pub fn complete_mapping(&mut self, mappings: MappingTable) {
        if self.step == Step::Suggest {
            self.mappings = mappings;
            self.step = Step::Fill;
        }
    }

    /// Applies one field edit during the Fill step. Records are mutable
    /// field-by-field only here; edits in any other step are ignored.
    pub fn update_field(&mut self, id: &str, field: Field, value: &str) {
        if self.step == Step::Fill {
            engine::update_field(&mut self.records, &mut self.missing, id, field, value);
        }
    }

    /// Fill -> Review. Freezes the record set into `ProcessedRecord`s:
    /// the mapped entity (or the Undefined sentinel when absent) plus a
    /// Ready/Incomplete status from the missing-field set.
    pub fn complete_fill(&mut self) {
        if self.step != Step::Fill {
            return;
        }

        self.processed = self
            .records
            .iter()
            .map(|record| {
                let ifc_type = self
                    .mappings
                    .get(&record.id)
                    .copied()
                    .unwrap_or(IfcEntity::Undefined);
                let status = if self.missing.contains_key(&record.id) {
                    Status::Incomplete
                } else {
                    Status::Ready
                };
                ProcessedRecord {
                    record: record.clone(),
                    ifc_type,
                    status,
                }
            })
            .collect();
        self.step = Step::Review;
    }

    /// Review -> Upload. Clears every accumulated collection; invalid from
    /// any other step.
    pub fn reset(&mut self) {
        if self.step != Step::Review {
            return;
        }

        self.files.clear();
        self.records.clear();
        self.mappings.clear();
        self.missing.clear();
        self.processed.clear();
        self.initially_missing = 0;
        self.step = Step::Upload;
    }

    /// Total count of unresolved fields across all records.
    #[must_use]
    pub fn total_missing_fields(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    /// Fill-step progress: share of initially-incomplete records that have
    /// been completed since, as a percentage. 100 when nothing was ever
    /// missing.
    #[must_use]
    pub fn fill_progress(&self) -> f64 {
        if self.initially_missing == 0 {
            return 100.0;
        }
        let completed = self.initially_missing - self.missing.len();
        completed as f64 / self.initially_missing as f64 * 100.0
    }

    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.processed
            .iter()
            .filter(|p| p.status == Status::Ready)
            .count()
    }

    #[must_use]
    pub fn incomplete_count(&self) -> usize {
        self.processed.len() - self.ready_count()
    }

    /// Review-step completion: ready records over all records, as a
    /// percentage. 100 for an empty set.
    #[must_use]
    pub fn completion_percentage(&self) -> f64 {
        if self.processed.is_empty() {
            return 100.0;
        }
        self.ready_count() as f64 / self.processed.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimensions;
    use pretty_assertions::assert_eq;

    fn csv_files() -> Vec<PathBuf> {
        vec![PathBuf::from("rooms.csv")]
    }

    fn bare_record(id: &str, raw_type: &str) -> Record {
        Record {
            id: id.to_string(),
            name: format!("{raw_type} 1"),
            raw_type: raw_type.to_string(),
            level: 1,
            dimensions: None,
            material: None,
        }
    }

    /// Drives a workflow to the Preview step with a fixed record set.
    fn workflow_with(records: Vec<Record>) -> Workflow {
        let mut workflow = Workflow::new(Some(0));
        workflow.files = csv_files();
        workflow.ingest(records);
        workflow.step = Step::Preview;
        workflow
    }

    #[test]
    fn upload_validates_before_advancing() {
        let mut workflow = Workflow::new(Some(0));

        let err = workflow.complete_upload(vec![PathBuf::from("model.ifc")]);
        assert!(err.is_err());
        assert_eq!(workflow.step(), Step::Upload);

        assert!(workflow.complete_upload(vec![]).is_err());
        assert_eq!(workflow.step(), Step::Upload);

        workflow.complete_upload(csv_files()).unwrap();
        assert_eq!(workflow.step(), Step::Preview);
        assert!(!workflow.records().is_empty());
        assert_eq!(workflow.mappings().len(), workflow.records().len());
    }

    #[test]
    fn upload_computes_suggestions_and_missing_fields() {
        let workflow = workflow_with(vec![
            bare_record("item-1", "Door"),
            bare_record("item-2", "Gizmo"),
        ]);

        assert_eq!(workflow.mappings()["item-1"], IfcEntity::Door);
        assert_eq!(workflow.mappings()["item-2"], IfcEntity::BuildingElement);
        assert_eq!(
            workflow.missing()["item-1"],
            vec![Field::Dimensions, Field::Material]
        );
        assert_eq!(workflow.total_missing_fields(), 4);
    }

    #[test]
    fn out_of_order_completions_are_ignored() {
        let mut workflow = Workflow::new(Some(0));

        workflow.complete_preview();
        workflow.complete_mapping(MappingTable::new());
        workflow.complete_fill();
        workflow.reset();
        assert_eq!(workflow.step(), Step::Upload);

        workflow.complete_upload(csv_files()).unwrap();
        workflow.complete_fill();
        assert_eq!(workflow.step(), Step::Preview);
        assert!(workflow.processed().is_empty());
    }

    #[test]
    fn mapping_overrides_are_sticky() {
        let mut workflow = workflow_with(vec![bare_record("item-1", "Door")]);
        workflow.complete_preview();

        let mut overrides = workflow.mappings().clone();
        overrides.insert("item-1".to_string(), IfcEntity::Covering);
        workflow.complete_mapping(overrides);

        workflow.complete_fill();
        assert_eq!(workflow.processed()[0].ifc_type, IfcEntity::Covering);
    }

    #[test]
    fn field_edits_only_apply_during_fill() {
        let mut workflow = workflow_with(vec![bare_record("item-1", "Door")]);

        workflow.update_field("item-1", Field::Material, "Steel");
        assert_eq!(workflow.records()[0].material, None);

        workflow.complete_preview();
        workflow.complete_mapping(workflow.mappings().clone());
        workflow.update_field("item-1", Field::Material, "Steel");
        assert_eq!(workflow.records()[0].material.as_deref(), Some("Steel"));
    }

    #[test]
    fn missing_mapping_entry_falls_back_to_undefined() {
        let mut workflow = workflow_with(vec![bare_record("item-1", "Door")]);
        workflow.complete_preview();
        workflow.complete_mapping(MappingTable::new());
        workflow.complete_fill();

        assert_eq!(workflow.processed()[0].ifc_type, IfcEntity::Undefined);
    }

    #[test]
    fn reset_is_only_valid_from_review() {
        let mut workflow = workflow_with(vec![bare_record("item-1", "Door")]);

        workflow.reset();
        assert_eq!(workflow.step(), Step::Preview);

        workflow.complete_preview();
        workflow.complete_mapping(workflow.mappings().clone());
        workflow.complete_fill();
        workflow.reset();

        assert_eq!(workflow.step(), Step::Upload);
        assert!(workflow.files().is_empty());
        assert!(workflow.records().is_empty());
        assert!(workflow.mappings().is_empty());
        assert!(workflow.missing().is_empty());
        assert!(workflow.processed().is_empty());
    }

    #[test]
    fn end_to_end_door_scenario() {
        let mut workflow = workflow_with(vec![bare_record("item-1", "Door")]);
        assert_eq!(
            workflow.missing()["item-1"],
            vec![Field::Dimensions, Field::Material]
        );

        workflow.complete_preview();
        workflow.complete_mapping(workflow.mappings().clone());

        workflow.update_field("item-1", Field::Width, "1");
        workflow.update_field("item-1", Field::Height, "2");
        workflow.update_field("item-1", Field::Depth, "0.1");
        workflow.update_field("item-1", Field::Material, "Wood");
        assert!(workflow.missing().is_empty());

        workflow.complete_fill();
        let processed = &workflow.processed()[0];
        assert_eq!(processed.status, Status::Ready);
        assert_eq!(processed.ifc_type, IfcEntity::Door);
        assert_eq!(processed.ifc_type.label(), "IFCDoor");
        assert_eq!(
            processed.record.dimensions,
            Some(Dimensions {
                width: 1.0,
                height: 2.0,
                depth: 0.1
            })
        );
        assert_eq!(workflow.completion_percentage(), 100.0);
    }

    #[test]
    fn fill_progress_tracks_completed_items() {
        let mut workflow = workflow_with(vec![
            bare_record("item-1", "Door"),
            bare_record("item-2", "Wall"),
        ]);
        workflow.complete_preview();
        workflow.complete_mapping(workflow.mappings().clone());
        assert_eq!(workflow.fill_progress(), 0.0);

        workflow.update_field("item-1", Field::Width, "1");
        workflow.update_field("item-1", Field::Height, "2");
        workflow.update_field("item-1", Field::Depth, "0.1");
        workflow.update_field("item-1", Field::Material, "Glass");
        assert_eq!(workflow.fill_progress(), 50.0);
    }
}

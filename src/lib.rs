//! # IFC Mapper
//!
//! A terminal wizard for converting non-BIM building data files into IFC
//! element records.
//!
//! ## Features
//!
//! - Five-step workflow: upload, preview, mapping, missing data, review
//! - Simulated data extraction (file parsing is mocked; a fixed seed makes
//!   runs reproducible)
//! - Keyword-based entity suggestions with a confidence heuristic
//! - Missing-field detection and record-by-record completion
//! - Export of the processed set to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use ifc_mapper::workflow::Workflow;
//!
//! let mut workflow = Workflow::new(Some(7));
//! workflow
//!     .complete_upload(vec!["rooms.csv".into()])
//!     .expect("supported file type");
//! println!("Extracted {} records", workflow.records().len());
//! ```

pub mod engine;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod ui;
pub mod workflow;

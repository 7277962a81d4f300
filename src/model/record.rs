use serde::Serialize;

/// Physical dimensions in meters.
///
/// A record either carries all three values or no `Dimensions` at all; a
/// partially-populated object is never considered complete. Zero is
/// indistinguishable from "missing" by design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// One building object extracted from an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    /// Free-text source category, e.g. "Door". Serialized as `type`.
    #[serde(rename = "type")]
    pub raw_type: String,
    /// Floor index, 1-based.
    pub level: u32,
    pub dimensions: Option<Dimensions>,
    pub material: Option<String>,
}

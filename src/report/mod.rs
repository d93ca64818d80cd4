//! Output documents.
//!
//! A successful check yields a [`LayoutReport`]; every failure tier maps to an
//! [`ErrorDocument`]. Both render as two-space indented JSON.

use serde::Serialize;
use serde_json::error::Category;

use crate::clearance::{ClearanceCheck, Clearances};
use crate::error::{CheckError, Result};
use crate::input::{FurnitureItem, RoomSpec};
use crate::metrics::{SpaceMetrics, round2};
use crate::rating::CirculationRating;

/// Shape callers must send for `furniture_list`.
pub const EXPECTED_FORMAT: &str = r#"[{"name":"Sofa","width":84,"depth":36}]"#;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomDimensions {
    pub length_ft: f64,
    pub width_ft: f64,
    pub total_area_sqft: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FurnitureAnalysis {
    pub total_pieces: usize,
    pub total_footprint_sqft: f64,
    pub footprint_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceAnalysis {
    pub open_space_sqft: f64,
    pub open_space_percent: f64,
    pub circulation_rating: CirculationRating,
}

/// Full verdict for one room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutReport {
    pub layout_valid: bool,
    pub room_dimensions: RoomDimensions,
    pub furniture_analysis: FurnitureAnalysis,
    pub space_analysis: SpaceAnalysis,
    pub clearances: Clearances,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub summary: String,
    /// Unrounded values the report was built from.
    #[serde(skip)]
    pub metrics: SpaceMetrics,
}

impl LayoutReport {
    pub fn assemble(
        room: &RoomSpec,
        furniture: &[FurnitureItem],
        metrics: SpaceMetrics,
        check: ClearanceCheck,
        recommendations: Vec<String>,
        summary: String,
    ) -> Self {
        Self {
            layout_valid: check.layout_valid(),
            room_dimensions: RoomDimensions {
                length_ft: room.length_ft,
                width_ft: room.width_ft,
                total_area_sqft: round2(metrics.room_area_sqft),
            },
            furniture_analysis: FurnitureAnalysis {
                total_pieces: furniture.len(),
                total_footprint_sqft: round2(metrics.total_footprint_sqft),
                footprint_percent: round2(metrics.footprint_percent),
            },
            space_analysis: SpaceAnalysis {
                open_space_sqft: round2(metrics.open_space_sqft),
                open_space_percent: round2(metrics.open_space_percent),
                circulation_rating: CirculationRating::from_open_percent(
                    metrics.open_space_percent,
                ),
            },
            clearances: check.clearances,
            issues: check.issues,
            recommendations,
            summary,
            metrics,
        }
    }

    pub fn rating(&self) -> CirculationRating {
        self.space_analysis.circulation_rating
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Structured failure returned in place of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorDocument {
    Invalid {
        error: String,
        details: Vec<String>,
        hint: String,
    },
    Parse {
        error: String,
        error_kind: String,
        details: String,
        received: String,
        expected_format: String,
    },
    Arguments {
        error: String,
        details: String,
        expected_format: String,
    },
    Internal {
        error: String,
        room_dimensions: String,
    },
}

impl ErrorDocument {
    /// Build the document for `err`; room dimensions give internal faults some context.
    pub fn from_error(err: &CheckError, room_length: f64, room_width: f64) -> Self {
        match err {
            CheckError::Invalid(errors) => ErrorDocument::Invalid {
                error: "Invalid input".to_string(),
                details: errors.clone(),
                hint: format!("furniture_list must be array like: {EXPECTED_FORMAT}"),
            },
            CheckError::Parse { source, received } => ErrorDocument::Parse {
                error: "Invalid JSON format in furniture_list".to_string(),
                error_kind: category_name(source.classify()).to_string(),
                details: source.to_string(),
                received: received.clone(),
                expected_format: EXPECTED_FORMAT.to_string(),
            },
            CheckError::Arguments(source) => ErrorDocument::Arguments {
                error: "Invalid tool arguments".to_string(),
                details: source.to_string(),
                expected_format: format!(
                    r#"{{"room_length":15,"room_width":12,"furniture_list":{EXPECTED_FORMAT},"room_type":"living_room"}}"#
                ),
            },
            CheckError::Internal(message) => ErrorDocument::Internal {
                error: format!("Layout optimization failed: {message}"),
                room_dimensions: format!("{room_length:?}' x {room_width:?}'"),
            },
        }
    }

    pub fn error(&self) -> &str {
        match self {
            ErrorDocument::Invalid { error, .. }
            | ErrorDocument::Parse { error, .. }
            | ErrorDocument::Arguments { error, .. }
            | ErrorDocument::Internal { error, .. } => error,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| {
            serde_json::json!({ "error": format!("Layout optimization failed: {err}") })
                .to_string()
        })
    }
}

fn category_name(category: Category) -> &'static str {
    match category {
        Category::Io => "io",
        Category::Syntax => "syntax",
        Category::Data => "data",
        Category::Eof => "eof",
    }
}

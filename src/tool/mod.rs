//! Callable-unit contract for orchestration layers.
//!
//! Agents discover the checker through a [`ToolDescriptor`] and call it with
//! a JSON argument object that [`ToolArgs`] decodes.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{CheckError, Result};
use crate::input::{DEFAULT_ROOM_TYPE, FurnitureInput, LayoutRequest};
use crate::report::EXPECTED_FORMAT;

pub const TOOL_NAME: &str = "room_layout_optimizer";

/// Name, description and input schema an orchestrator registers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl Default for ToolDescriptor {
    fn default() -> Self {
        Self {
            name: TOOL_NAME.to_string(),
            description: format!(
                "Validates if furniture fits in a room and provides layout recommendations. \
                 furniture_list MUST be a JSON array with this exact format: {EXPECTED_FORMAT} \
                 where width and depth are in INCHES (not feet). room_length and room_width are in FEET. \
                 Returns JSON with layout validation, space analysis, and recommendations."
            ),
            input_schema: input_schema(),
        }
    }
}

fn input_schema() -> Value {
    json!({
        "type": "object",
        "required": ["room_length", "room_width", "furniture_list"],
        "properties": {
            "room_length": {"type": "number", "description": "Room length in feet"},
            "room_width": {"type": "number", "description": "Room width in feet"},
            "furniture_list": {
                "description": format!(
                    "Furniture items, either a JSON array or a string holding one. \
                     Required format: {EXPECTED_FORMAT}; width and depth are in inches."
                ),
                "oneOf": [
                    {"type": "string"},
                    {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "required": ["name", "width", "depth"],
                            "properties": {
                                "name": {"type": "string"},
                                "width": {"type": "number"},
                                "depth": {"type": "number"}
                            }
                        }
                    }
                ]
            },
            "room_type": {
                "type": "string",
                "default": DEFAULT_ROOM_TYPE,
                "description": "Type of room: living_room, bedroom, office, etc."
            }
        }
    })
}

/// Arguments as an orchestrator sends them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolArgs {
    pub room_length: f64,
    pub room_width: f64,
    /// A string is decoded as structured text; anything else is validated as-is.
    pub furniture_list: Value,
    #[serde(default = "default_room_type")]
    pub room_type: String,
}

fn default_room_type() -> String {
    DEFAULT_ROOM_TYPE.to_string()
}

impl ToolArgs {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(CheckError::Arguments)
    }

    pub fn into_request(self) -> LayoutRequest {
        let furniture = match self.furniture_list {
            Value::String(text) => FurnitureInput::Text(text),
            other => FurnitureInput::Value(other),
        };
        LayoutRequest {
            room_length: self.room_length,
            room_width: self.room_width,
            room_type: self.room_type,
            furniture,
        }
    }
}

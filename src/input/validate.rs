use serde_json::{Map, Value};

use crate::config::Limits;
use crate::error::{CheckError, Result};

use super::core::{FurnitureItem, RoomSpec};

/// Input that passed every range and shape rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLayout {
    pub room: RoomSpec,
    pub furniture: Vec<FurnitureItem>,
}

/// Check room dimensions and the decoded furniture list.
///
/// Every rule runs; the error carries one message per violation in the order
/// they were found: room length, room width, list shape, then items in order.
pub fn validate(
    room_length: f64,
    room_width: f64,
    room_type: &str,
    furniture: &Value,
    limits: &Limits,
) -> Result<ValidatedLayout> {
    let mut errors = Vec::new();

    if !limits.room_in_range(room_length) {
        errors.push(format!(
            "Room length ({room_length:?}') outside range ({}-{} feet)",
            limits.room_min_ft, limits.room_max_ft
        ));
    }
    if !limits.room_in_range(room_width) {
        errors.push(format!(
            "Room width ({room_width:?}') outside range ({}-{} feet)",
            limits.room_min_ft, limits.room_max_ft
        ));
    }

    let mut items = Vec::new();
    if is_empty(furniture) {
        errors.push("Furniture list is empty".to_string());
    } else if let Value::Array(entries) = furniture {
        if entries.len() > limits.max_pieces {
            errors.push(format!(
                "Too many furniture pieces (max {})",
                limits.max_pieces
            ));
        }
        for (idx, entry) in entries.iter().enumerate() {
            if let Some(item) = validate_item(idx + 1, entry, limits, &mut errors) {
                items.push(item);
            }
        }
    } else {
        errors.push(format!(
            "Furniture list must be an array, got {}",
            json_type_name(furniture)
        ));
    }

    if !errors.is_empty() {
        return Err(CheckError::Invalid(errors));
    }

    Ok(ValidatedLayout {
        room: RoomSpec {
            length_ft: room_length,
            width_ft: room_width,
            room_type: room_type.to_string(),
        },
        furniture: items,
    })
}

fn validate_item(
    position: usize,
    entry: &Value,
    limits: &Limits,
    errors: &mut Vec<String>,
) -> Option<FurnitureItem> {
    let Value::Object(fields) = entry else {
        errors.push(format!(
            "Item {position} must be an object with name, width, depth"
        ));
        return None;
    };
    let found_before = errors.len();

    let name = match fields.get("name") {
        None => {
            errors.push(format!("Item {position} missing 'name' field"));
            None
        }
        Some(Value::String(name)) if !name.trim().is_empty() => Some(name.clone()),
        Some(_) => {
            errors.push(format!("Item {position} 'name' must be a non-empty string"));
            None
        }
    };

    let width = fields.get("width");
    let depth = fields.get("depth");
    if width.is_none() {
        errors.push(format!(
            "Item {position} ('{}') missing 'width' field",
            display_name(fields, "unnamed")
        ));
    }
    if depth.is_none() {
        errors.push(format!(
            "Item {position} ('{}') missing 'depth' field",
            display_name(fields, "unnamed")
        ));
    }

    let (Some(width), Some(depth)) = (width, depth) else {
        return None;
    };
    let label = display_name(fields, &position.to_string());
    let width_in = check_dimension(&label, "width", width, limits, errors);
    let depth_in = check_dimension(&label, "depth", depth, limits, errors);

    if errors.len() != found_before {
        return None;
    }
    Some(FurnitureItem {
        name: name?,
        width_in: width_in?,
        depth_in: depth_in?,
    })
}

fn check_dimension(
    label: &str,
    field: &str,
    value: &Value,
    limits: &Limits,
    errors: &mut Vec<String>,
) -> Option<f64> {
    match value.as_f64() {
        Some(inches) if limits.item_in_range(inches) => Some(inches),
        Some(_) => {
            errors.push(format!("Item '{label}' {field} ({value}\") unrealistic"));
            None
        }
        None => {
            errors.push(format!(
                "Item '{label}' {field} must be a number, got {}",
                json_type_name(value)
            ));
            None
        }
    }
}

/// Name used in messages: the string name, any other JSON rendered as text, or `fallback`.
fn display_name(fields: &Map<String, Value>, fallback: &str) -> String {
    match fields.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => fallback.to_string(),
    }
}

/// Falsy JSON: null, `false`, zero and empty containers or strings.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::Array(entries) => entries.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::String(text) => text.is_empty(),
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

use serde::Serialize;
use serde_json::{Value, json};

use crate::config::Limits;
use crate::error::{CheckError, Result};

pub const DEFAULT_ROOM_TYPE: &str = "living_room";

/// Validated room dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSpec {
    pub length_ft: f64,
    pub width_ft: f64,
    /// Informational tag such as `bedroom`; never affects the verdict.
    pub room_type: String,
}

impl RoomSpec {
    pub fn area_sqft(&self) -> f64 {
        self.length_ft * self.width_ft
    }

    pub fn length_in(&self) -> f64 {
        self.length_ft * 12.0
    }

    pub fn width_in(&self) -> f64 {
        self.width_ft * 12.0
    }

    /// Only length against width is considered; a wide, shallow room does not qualify.
    pub fn is_long_narrow(&self, ratio: f64) -> bool {
        self.length_ft > self.width_ft * ratio
    }
}

/// Rectangular furniture envelope, inches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FurnitureItem {
    pub name: String,
    #[serde(rename = "width")]
    pub width_in: f64,
    #[serde(rename = "depth")]
    pub depth_in: f64,
}

impl FurnitureItem {
    pub fn new(name: impl Into<String>, width_in: f64, depth_in: f64) -> Self {
        Self {
            name: name.into(),
            width_in,
            depth_in,
        }
    }

    pub fn footprint_sqft(&self) -> f64 {
        (self.width_in / 12.0) * (self.depth_in / 12.0)
    }

    pub fn larger_dim(&self) -> f64 {
        self.width_in.max(self.depth_in)
    }
}

/// Furniture list as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FurnitureInput {
    /// Structured text, e.g. `[{"name":"Sofa","width":84,"depth":36}]`.
    Text(String),
    /// Already decoded value; skips the parse stage.
    Value(Value),
}

impl FurnitureInput {
    pub fn from_items(items: &[FurnitureItem]) -> Self {
        let entries = items
            .iter()
            .map(|item| json!({"name": item.name, "width": item.width_in, "depth": item.depth_in}))
            .collect();
        FurnitureInput::Value(Value::Array(entries))
    }
}

impl From<&str> for FurnitureInput {
    fn from(raw: &str) -> Self {
        FurnitureInput::Text(raw.to_string())
    }
}

impl From<String> for FurnitureInput {
    fn from(raw: String) -> Self {
        FurnitureInput::Text(raw)
    }
}

impl From<Value> for FurnitureInput {
    fn from(value: Value) -> Self {
        FurnitureInput::Value(value)
    }
}

/// One invocation of the checker.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    pub room_length: f64,
    pub room_width: f64,
    pub room_type: String,
    pub furniture: FurnitureInput,
}

impl LayoutRequest {
    pub fn new(room_length: f64, room_width: f64, furniture: impl Into<FurnitureInput>) -> Self {
        Self {
            room_length,
            room_width,
            room_type: DEFAULT_ROOM_TYPE.to_string(),
            furniture: furniture.into(),
        }
    }

    pub fn from_items(room_length: f64, room_width: f64, items: &[FurnitureItem]) -> Self {
        Self::new(room_length, room_width, FurnitureInput::from_items(items))
    }

    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Hex blake3 digest of the request, stable across calls; used to correlate log events.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.room_length.to_bits().to_le_bytes());
        hasher.update(&self.room_width.to_bits().to_le_bytes());
        hasher.update(self.room_type.as_bytes());
        hasher.update(&[0]);
        match &self.furniture {
            FurnitureInput::Text(raw) => {
                hasher.update(b"t");
                hasher.update(raw.as_bytes());
            }
            FurnitureInput::Value(value) => {
                hasher.update(b"v");
                hasher.update(value.to_string().as_bytes());
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

/// Decode the furniture list. Text that is not valid JSON fails with an excerpt of the input.
pub fn parse_furniture(input: &FurnitureInput, limits: &Limits) -> Result<Value> {
    match input {
        FurnitureInput::Value(value) => Ok(value.clone()),
        FurnitureInput::Text(raw) => {
            serde_json::from_str(raw).map_err(|source| CheckError::Parse {
                source,
                received: raw.chars().take(limits.excerpt_chars).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_converts_inches_to_square_feet() {
        let sofa = FurnitureItem::new("Sofa", 84.0, 36.0);
        assert!((sofa.footprint_sqft() - 21.0).abs() < 1e-9);
        assert_eq!(sofa.larger_dim(), 84.0);
    }

    #[test]
    fn item_serializes_with_wire_keys() {
        let sofa = FurnitureItem::new("Sofa", 84.0, 36.0);
        let expected = json!({"name": "Sofa", "width": 84.0, "depth": 36.0});
        assert_eq!(serde_json::to_value(&sofa).unwrap(), expected);
        assert_eq!(
            FurnitureInput::from_items(&[sofa]),
            FurnitureInput::Value(json!([expected]))
        );
    }

    #[test]
    fn long_narrow_is_not_symmetric() {
        let long = RoomSpec {
            length_ft: 20.0,
            width_ft: 10.0,
            room_type: DEFAULT_ROOM_TYPE.into(),
        };
        let wide = RoomSpec {
            length_ft: 10.0,
            width_ft: 20.0,
            room_type: DEFAULT_ROOM_TYPE.into(),
        };
        assert!(long.is_long_narrow(1.5));
        assert!(!wide.is_long_narrow(1.5));
    }

    #[test]
    fn text_input_parses() {
        let input = FurnitureInput::from(r#"[{"name":"Sofa","width":84,"depth":36}]"#);
        let value = parse_furniture(&input, &Limits::default()).unwrap();
        assert_eq!(value[0]["name"], "Sofa");
    }

    #[test]
    fn parse_failure_truncates_excerpt() {
        let raw = format!("[{{name: Sofa}}{}", "x".repeat(400));
        let err = parse_furniture(&FurnitureInput::Text(raw), &Limits::default()).unwrap_err();
        match err {
            CheckError::Parse { received, .. } => {
                assert_eq!(received.chars().count(), 200);
                assert!(received.starts_with("[{name: Sofa}"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn fingerprint_distinguishes_inputs() {
        let a = LayoutRequest::new(15.0, 12.0, "[]");
        let b = LayoutRequest::new(15.0, 12.0, "[]");
        let c = LayoutRequest::new(15.0, 12.0, "[]").with_room_type("bedroom");
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }
}

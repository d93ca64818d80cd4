use std::sync::Arc;

use room_check::{LayoutValidator, Logger, MemorySink, ToolDescriptor, ValidatorConfig};
use serde_json::{Value, json};

#[test]
fn invoke_accepts_string_encoded_furniture() {
    let args = json!({
        "room_length": 15.0,
        "room_width": 12.0,
        "furniture_list": "[{\"name\":\"Sofa\",\"width\":84,\"depth\":36},{\"name\":\"Chair\",\"width\":32,\"depth\":34}]",
        "room_type": "living_room"
    });
    let text = LayoutValidator::default().invoke(&args.to_string());
    assert!(text.starts_with("{\n  \"layout_valid\": true,"));
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["furniture_analysis"]["total_pieces"], json!(2));
}

#[test]
fn invoke_accepts_array_furniture_and_defaults_room_type() {
    let sink = Arc::new(MemorySink::new());
    let validator =
        LayoutValidator::new(ValidatorConfig::default().with_logger(Logger::from_shared(sink.clone())));
    let args = json!({
        "room_length": 10,
        "room_width": 10,
        "furniture_list": [{"name": "King Bed", "width": 76, "depth": 80}]
    });
    let value: Value = serde_json::from_str(&validator.invoke(&args.to_string())).unwrap();
    assert_eq!(value["layout_valid"], json!(false));
    assert_eq!(value["issues"], json!(["King Bed (76\"x80\") too large for room"]));

    let checked = sink
        .events()
        .into_iter()
        .find(|event| event.message == "layout_checked")
        .unwrap();
    assert_eq!(checked.field("room_type"), Some(&json!("living_room")));
}

#[test]
fn invoke_reports_foreign_list_types() {
    let args = json!({
        "room_length": 12,
        "room_width": 12,
        "furniture_list": "{\"name\": \"Sofa\", \"width\": 84, \"depth\": 36}"
    });
    let value: Value =
        serde_json::from_str(&LayoutValidator::default().invoke(&args.to_string())).unwrap();
    assert_eq!(value["error"], "Invalid input");
    assert_eq!(
        value["details"],
        json!(["Furniture list must be an array, got object"])
    );
}

#[test]
fn invoke_never_fails_on_garbage() {
    for raw in ["", "null", "[1, 2]", "{\"room_length\": \"ten\"}", "{{{{"] {
        let value: Value = serde_json::from_str(&LayoutValidator::default().invoke(raw)).unwrap();
        assert_eq!(value["error"], "Invalid tool arguments", "{raw}");
    }
}

#[test]
fn descriptor_serializes_for_registration() {
    let value = serde_json::to_value(ToolDescriptor::default()).unwrap();
    assert_eq!(value["name"], "room_layout_optimizer");
    assert_eq!(value["input_schema"]["type"], "object");
}

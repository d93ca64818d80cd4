//! Request types plus the parse and validation stages.
//!
//! Callers hand over room dimensions in feet and a furniture list either as
//! structured text or as an already-decoded JSON value. Parsing turns text
//! into a value; validation turns a value into typed [`FurnitureItem`]s or an
//! aggregated list of every problem found.

mod core;
mod validate;

pub use self::core::{
    DEFAULT_ROOM_TYPE, FurnitureInput, FurnitureItem, LayoutRequest, RoomSpec, parse_furniture,
};
pub use validate::{ValidatedLayout, json_type_name, validate};

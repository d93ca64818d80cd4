//! The layout checking engine.
//!
//! [`LayoutValidator::check`] runs parse, validation, metrics, clearance,
//! rating, advice and summary stages in one forward pass and returns a typed
//! result. [`LayoutValidator::evaluate`] and [`LayoutValidator::invoke`] wrap
//! it in the text boundary used by orchestration layers: they always return a
//! JSON document and never panic.

mod core;

pub use self::core::LayoutValidator;

//! Room layout feasibility checker.
//!
//! Given room dimensions and a list of furniture footprints, the validator
//! decides whether the furniture fits, how much circulation space remains,
//! which pieces raise clearance concerns, and what to recommend. The engine
//! is a pure function of its input; the only side effect is optional
//! structured logging.

pub mod advice;
pub mod clearance;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod rating;
pub mod report;
pub mod tool;
pub mod validator;

pub use advice::{recommendations, summary};
pub use clearance::{ClearanceCheck, ClearanceRecord, Clearances, WALKWAY_KEY};
pub use config::{Limits, ValidatorConfig};
pub use error::{CheckError, Result};
pub use input::{
    FurnitureInput, FurnitureItem, LayoutRequest, RoomSpec, ValidatedLayout, parse_furniture,
    validate,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::SpaceMetrics;
pub use rating::CirculationRating;
pub use report::{ErrorDocument, LayoutReport};
pub use tool::{ToolArgs, ToolDescriptor};
pub use validator::LayoutValidator;

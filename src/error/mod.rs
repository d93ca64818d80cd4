mod types;

pub use types::{CheckError, Result};

pub mod acpi;
pub mod config;
pub mod derived;
pub mod error;
pub mod fields;
pub mod model;
pub mod platform;
pub mod scan;

pub use acpi::{AcpiCollector, InitStatus};
pub use config::Config;
pub use error::{AcpiError, Result};
pub use model::*;
pub use platform::{AcpiSource, ProcFs};

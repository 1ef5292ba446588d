//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs` or `std::process` (beyond the `Output` value type).
//! All functions are synchronous and take data in, returning data out.

pub mod command;
pub mod config;
pub mod error;
pub mod layout;
pub mod outcome;
pub mod unit;

pub use command::{Command, decode};
pub use config::DeployConfig;
pub use error::{ConfigError, DeployError};
pub use layout::ServiceLayout;
pub use outcome::BestEffort;
pub use unit::UnitDefinition;

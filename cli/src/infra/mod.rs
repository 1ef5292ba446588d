//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! systemd adapter, the detector hook, filesystem access and config loading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod detector;
pub mod fs;
pub mod systemctl;

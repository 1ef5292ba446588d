//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, plus the spinner in `crate::output::progress`.

pub mod dispatch;
pub mod firewall;
pub mod install;
pub mod remove;

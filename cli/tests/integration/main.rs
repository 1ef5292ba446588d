//! Integration tests for minisiem-deploy
//!
//! These tests spawn the actual binary against a throwaway host layout: a
//! temp unit directory, a fake `systemctl` and a fake detector runtime.

#![cfg(unix)]

mod cli_tests;
mod helpers;
mod lifecycle;

//! Test helpers module
//!
//! This module provides utilities for testing the SportClub client: a mock
//! backend, recording notifier/host doubles, fixtures and a unified test
//! context.

#![allow(dead_code)]

pub mod backend_mock;
pub mod recording;
pub mod test_context;
pub mod test_data;

pub use backend_mock::*;
pub use recording::*;
pub use test_context::*;
pub use test_data::*;

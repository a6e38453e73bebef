//! Common test utilities for pricing tests

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{EngineHarness, TestHelpers};

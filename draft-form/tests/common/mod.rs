//! Common test utilities for draft form tests

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{DirectoryLookup, TestHelpers};

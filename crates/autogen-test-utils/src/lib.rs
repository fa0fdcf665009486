//! Shared test utilities for the import-block regenerator workspace.
//!
//! This crate provides standardised declaration-tree fixtures so crate test
//! suites do not each hand-roll temp directories. It is a dev-dependency
//! only and never published.
//!
//! # Modules
//!
//! - [`tree`]: [`TestTree`] builder for a declaration directory plus target file

pub mod tree;

pub use tree::TestTree;

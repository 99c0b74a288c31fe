//! Common utilities for the kata workspace.
//!
//! This crate provides shared infrastructure used by the individual katas:
//! - **Warning System** - colored terminal output for input that is accepted
//!   but probably not what the caller meant

pub mod warning;

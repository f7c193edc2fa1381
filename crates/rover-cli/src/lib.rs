//! Rover planner CLI library.
//!
//! This crate provides the output helpers used by the `rover-cli` binary:
//! report rendering in the selected format and artifact writing.

pub mod output;

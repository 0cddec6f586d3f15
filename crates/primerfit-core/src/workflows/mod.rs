//! # Workflows Module
//!
//! Top-level entry points that run the engine over a batch of inputs.
//!
//! - **Primer Selection** ([`select`]) - Validates and orients each input, runs the greedy
//!   descent, and packages one result per entry.
//! - **Reporting** ([`report`]) - The injected interface that receives summaries and loss curves.

pub mod report;
pub mod select;

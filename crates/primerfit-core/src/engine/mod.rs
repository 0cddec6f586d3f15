//! # Engine Module
//!
//! The stateful side of primer selection: the greedy descent and everything
//! it needs to run.
//!
//! ## Overview
//!
//! A descent starts from an empty candidate and grows it one base at a time,
//! scoring each extension with the [`core`](crate::core) scorer and loss model
//! and stopping at the first extension that makes the loss worse. The engine
//! owns that loop, the configuration that parameterizes it, and the
//! per-prefix loss curve used for plotting.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Genome length, probability weights, target Tm, orientation handling
//! - **Descent State** ([`state`]) - Candidate, evaluated steps, and the final extension
//! - **Greedy Extension** ([`extender`]) - The one-pass stepwise descent
//! - **Loss Curves** ([`curve`]) - Per-prefix loss components for visualization
//! - **Progress Monitoring** ([`progress`]) - Batch progress events for user feedback
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod curve;
pub mod error;
pub mod extender;
pub mod progress;
pub mod state;

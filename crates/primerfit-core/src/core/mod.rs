//! # Core Module
//!
//! Stateless building blocks for primer scoring.
//!
//! ## Overview
//!
//! The core module holds the pieces that carry no optimization state: the
//! validated sequence model and the pure scoring functions the descent is
//! built on. Everything here is deterministic and side-effect free.
//!
//! ## Architecture
//!
//! - **Sequence Representation** ([`models`]) - Nucleotides, validated sequences, and strand orientation
//! - **Scoring** ([`scoring`]) - Melting temperature, chance-occurrence probability, and the loss model
//!
//! ## Scientific Foundation
//!
//! - **Wallace rule** for melting temperature: 4 °C per G/C pair, 2 °C per A/T pair
//! - **Uniform random genome model** for the probability of a chance match

pub mod models;
pub mod scoring;

//! # primerfit Core Library
//!
//! Greedy stepwise selection of PCR primers. Each candidate primer is scored
//! by its Wallace-rule melting temperature and by the probability that it
//! occurs by chance in a genome of a given size; the two are combined into a
//! single loss that the descent minimizes one base at a time.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Validated sequences and pure scoring and loss functions.
//!
//! - **[`engine`]: The Logic Core.** Configuration, the greedy extender, descent state,
//!   loss curves, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Batch primer selection with optional reporting.
//!
//! ## Quick Start
//!
//! ```rust
//! use primerfit::engine::config::SelectionConfigBuilder;
//! use primerfit::engine::progress::ProgressReporter;
//! use primerfit::workflows::report::NullReporter;
//! use primerfit::workflows::select::{PrimerRequest, select_primers};
//!
//! let config = SelectionConfigBuilder::new().build()?;
//! let requests = [PrimerRequest::forward("ATGTTTTTCAACAGACTAAGCGC")];
//! let results = select_primers(&requests, &config, &mut NullReporter, &ProgressReporter::new())?;
//! assert_eq!(results[0].primer.as_str(), "ATGTTTTTCAACAGACTAAGCGC");
//! # Ok::<(), primerfit::engine::error::EngineError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

use crate::core::models::sequence::{Orientation, Sequence};
use crate::core::scoring::scorer::ScoreResult;
use crate::engine::config::SelectionConfig;
use crate::engine::curve;
use crate::engine::error::EngineError;
use crate::engine::extender::GreedyExtender;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{ExtensionStep, StopReason};
use crate::workflows::report::Reporter;
use serde::Serialize;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

const SUMMARY_RULE: &str = "------------------------------";

/// One input entry: the sequence text as supplied and the strand it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimerRequest {
    pub key: String,
    pub orientation: Orientation,
}

impl PrimerRequest {
    pub fn new(key: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            key: key.into(),
            orientation,
        }
    }

    pub fn forward(key: impl Into<String>) -> Self {
        Self::new(key, Orientation::Forward)
    }

    pub fn backward(key: impl Into<String>) -> Self {
        Self::new(key, Orientation::Backward)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimerResult {
    pub key: String,
    pub orientation: Orientation,
    /// The orientation-normalized input the primer was grown along.
    pub template: Sequence,
    pub primer: Sequence,
    pub score: ScoreResult,
    pub steps: Vec<ExtensionStep>,
    #[serde(skip)]
    pub stop_reason: StopReason,
}

impl PrimerResult {
    pub fn len(&self) -> usize {
        self.primer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primer.is_empty()
    }

    /// Human-readable block: orientation, primer, Tm, probability to ten
    /// decimals, and length, followed by a rule.
    pub fn summary(&self) -> String {
        format!(
            "{} primer:\n{}\nTm: {} | prob: {:.10} | length: {}\n{}",
            self.orientation,
            self.primer,
            self.score.melting_temperature,
            self.score.occurrence_probability,
            self.len(),
            SUMMARY_RULE
        )
    }
}

/// Forward inputs are used as-is. Backward inputs are reversed, after being
/// complemented base by base when `complement_backward` is set.
pub fn normalize_orientation(
    sequence: &Sequence,
    orientation: Orientation,
    complement_backward: bool,
) -> Sequence {
    match orientation {
        Orientation::Forward => sequence.clone(),
        Orientation::Backward if complement_backward => sequence.reverse_complement(),
        Orientation::Backward => sequence.reversed(),
    }
}

/// Selects a primer for a single entry.
#[instrument(skip_all, name = "select_primer", fields(key = %request.key, orientation = %request.orientation))]
pub fn select_primer(
    request: &PrimerRequest,
    config: &SelectionConfig,
) -> Result<PrimerResult, EngineError> {
    let sequence =
        Sequence::parse(&request.key).map_err(|e| EngineError::request(&request.key, e))?;
    let template = normalize_orientation(&sequence, request.orientation, config.complement_backward);

    let extender = GreedyExtender::from_config(config);
    let extension = extender
        .extend(template.as_str())
        .map_err(|e| EngineError::request(&request.key, e))?;

    let primer =
        Sequence::parse(&extension.primer).map_err(|e| EngineError::request(&request.key, e))?;
    let score = extender
        .scorer()
        .score(primer.as_str())
        .map_err(|e| EngineError::request(&request.key, e))?;

    debug!(
        primer = %primer,
        tm = score.melting_temperature,
        probability = score.occurrence_probability,
        "Primer selected."
    );

    Ok(PrimerResult {
        key: request.key.clone(),
        orientation: request.orientation,
        template,
        primer,
        score,
        steps: extension.steps,
        stop_reason: extension.stop_reason,
    })
}

/// Selects one primer per entry, in input order.
///
/// The first failing entry aborts the batch. Callers that want to skip bad
/// entries should call [`select_primer`] per entry instead. An empty batch
/// yields no results.
#[instrument(skip_all, name = "select_primers", fields(entries = requests.len()))]
pub fn select_primers(
    requests: &[PrimerRequest],
    config: &SelectionConfig,
    reporter: &mut dyn Reporter,
    progress: &ProgressReporter,
) -> Result<Vec<PrimerResult>, EngineError> {
    info!("Selecting primers for {} input(s).", requests.len());
    progress.report(Progress::BatchStart {
        total_entries: requests.len() as u64,
    });

    if requests.is_empty() {
        progress.report(Progress::Message("No input sequences supplied.".to_string()));
    }

    #[cfg(not(feature = "parallel"))]
    let iterator = requests.iter();

    #[cfg(feature = "parallel")]
    let iterator = requests.par_iter();

    // The reported failure is the earliest in input order, whichever worker
    // reaches an error first.
    let outcomes: Vec<Result<PrimerResult, EngineError>> = iterator
        .map(|request| -> Result<PrimerResult, EngineError> {
            let result = select_primer(request, config)?;
            progress.report(Progress::EntryFinished {
                key: result.key.clone(),
                orientation: result.orientation,
                primer_length: result.len(),
            });
            Ok(result)
        })
        .collect();
    let results = outcomes.into_iter().collect::<Result<Vec<_>, EngineError>>()?;

    progress.report(Progress::BatchFinish);

    if config.report.summary || config.report.trace {
        let scorer = config.scorer();
        let curve_model = config.curve_loss_model();
        for result in &results {
            if config.report.summary {
                reporter.report(result);
            }
            if config.report.trace {
                let curve = curve::loss_curve(result.template.as_str(), &scorer, &curve_model)
                    .map_err(|e| EngineError::request(&result.key, e))?;
                reporter.report_trace(result, &curve);
            }
        }
    }

    info!("Selected {} primer(s).", results.len());
    Ok(results)
}

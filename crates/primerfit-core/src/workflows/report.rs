use crate::engine::curve::LossCurve;
use crate::workflows::select::PrimerResult;

/// Receives selection results as they are finalized.
///
/// Called from the selection workflow only when the matching flag in
/// [`ReportConfig`](crate::engine::config::ReportConfig) is set. Calls happen
/// in input order, after every entry in the batch has been processed.
pub trait Reporter {
    fn report(&mut self, result: &PrimerResult);

    /// `curve` covers every prefix of `result.template`.
    fn report_trace(&mut self, result: &PrimerResult, curve: &LossCurve);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _result: &PrimerResult) {}

    fn report_trace(&mut self, _result: &PrimerResult, _curve: &LossCurve) {}
}

/// Collects everything it is given. Useful for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub summaries: Vec<String>,
    pub traces: Vec<(String, LossCurve)>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, result: &PrimerResult) {
        self.summaries.push(result.summary());
    }

    fn report_trace(&mut self, result: &PrimerResult, curve: &LossCurve) {
        self.traces.push((result.key.clone(), curve.clone()));
    }
}

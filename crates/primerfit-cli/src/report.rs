use crate::error::{CliError, Result};
use primerfit::engine::curve::LossCurve;
use primerfit::workflows::report::Reporter;
use primerfit::workflows::select::PrimerResult;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Prints summaries to `out` and writes loss curves either as one CSV file
/// per entry under `trace_dir` or as a table on `out`.
///
/// [`Reporter`] methods cannot fail, so the first error is kept and handed
/// back by [`ConsoleReporter::finish`]; later calls become no-ops.
pub struct ConsoleReporter<W: Write> {
    out: W,
    trace_dir: Option<PathBuf>,
    traces_written: usize,
    error: Option<CliError>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, trace_dir: Option<PathBuf>) -> Self {
        Self {
            out,
            trace_dir,
            traces_written: 0,
            error: None,
        }
    }

    pub fn finish(self) -> Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn record(&mut self, result: Result<()>) {
        if let Err(e) = result {
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }

    fn write_trace(&mut self, result: &PrimerResult, curve: &LossCurve) -> Result<()> {
        self.traces_written += 1;
        match &self.trace_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                let path = trace_path(dir, self.traces_written, result);
                debug!("Writing loss curve for '{}' to {:?}", result.key, path);
                write_curve_csv(curve, File::create(&path)?)?;
                info!("Loss curve written to {:?}", path);
            }
            None => {
                writeln!(self.out, "{} loss curve for {}:", result.orientation, result.key)?;
                write_curve_table(curve, &mut self.out)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, result: &PrimerResult) {
        if self.error.is_some() {
            return;
        }
        let written = writeln!(self.out, "{}", result.summary()).map_err(CliError::from);
        self.record(written);
    }

    fn report_trace(&mut self, result: &PrimerResult, curve: &LossCurve) {
        if self.error.is_some() {
            return;
        }
        let written = self.write_trace(result, curve);
        self.record(written);
    }
}

/// `001-forward.csv`, `002-backward.csv`, ... numbered in input order.
pub fn trace_path(dir: &Path, index: usize, result: &PrimerResult) -> PathBuf {
    let orientation = result.orientation.to_string().to_ascii_lowercase();
    dir.join(format!("{:03}-{}.csv", index, orientation))
}

pub fn write_curve_csv<W: Write>(curve: &LossCurve, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in curve.points() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_curve_table<W: Write>(curve: &LossCurve, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:>6}  {:>14}  {:>14}  {:>14}",
        "length", "temperature", "probability", "total"
    )?;
    for point in curve.points() {
        writeln!(
            out,
            "{:>6}  {:>14.4}  {:>14.4}  {:>14.4}",
            point.prefix_length, point.temperature_loss, point.probability_loss, point.total_loss
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use primerfit::core::scoring::loss::LossModel;
    use primerfit::core::scoring::scorer::Scorer;
    use primerfit::engine::config::SelectionConfigBuilder;
    use primerfit::engine::curve::loss_curve;
    use primerfit::engine::progress::ProgressReporter;
    use primerfit::workflows::select::{PrimerRequest, select_primers};
    use tempfile::tempdir;

    fn default_curve(sequence: &str) -> LossCurve {
        loss_curve(sequence, &Scorer::default(), &LossModel::default()).unwrap()
    }

    #[test]
    fn curve_csv_has_header_and_one_row_per_prefix() {
        let mut buffer = Vec::new();
        write_curve_csv(&default_curve("AT"), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "prefix_length,temperature_loss,probability_loss,total_loss"
        );
        assert_eq!(lines[1], "0,4900.0,0.0,4900.0");
        assert!(lines[3].starts_with("2,"));
    }

    #[test]
    fn curve_table_lists_every_prefix() {
        let mut buffer = Vec::new();
        write_curve_table(&default_curve("GCA"), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 5);
        assert!(text.lines().next().unwrap().contains("temperature"));
    }

    #[test]
    fn summaries_are_printed_in_input_order() {
        let config = SelectionConfigBuilder::new().build().unwrap();
        let requests = vec![PrimerRequest::forward("AT"), PrimerRequest::backward("GC")];
        let mut reporter = ConsoleReporter::new(Vec::new(), None);

        select_primers(&requests, &config, &mut reporter, &ProgressReporter::new()).unwrap();

        let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
        let forward = text.find("Forward primer:\nAT\n").unwrap();
        let backward = text.find("Backward primer:\nCG\n").unwrap();
        assert!(forward < backward);
        assert!(text.contains("Tm: 4 | prob: "));
    }

    #[test]
    fn traces_go_to_numbered_csv_files_when_a_directory_is_given() {
        let dir = tempdir().unwrap();
        let trace_dir = dir.path().join("traces");
        let config = SelectionConfigBuilder::new()
            .report_summary(false)
            .report_trace(true)
            .build()
            .unwrap();
        let requests = vec![PrimerRequest::forward("AT"), PrimerRequest::backward("GCA")];
        let mut reporter = ConsoleReporter::new(Vec::new(), Some(trace_dir.clone()));

        select_primers(&requests, &config, &mut reporter, &ProgressReporter::new()).unwrap();

        let out = reporter.finish().unwrap();
        assert!(out.is_empty());

        let first = fs::read_to_string(trace_dir.join("001-forward.csv")).unwrap();
        let second = fs::read_to_string(trace_dir.join("002-backward.csv")).unwrap();
        assert_eq!(first.lines().count(), 4);
        assert_eq!(second.lines().count(), 5);
    }

    #[test]
    fn traces_are_printed_as_tables_without_a_directory() {
        let config = SelectionConfigBuilder::new()
            .report_summary(false)
            .report_trace(true)
            .build()
            .unwrap();
        let mut reporter = ConsoleReporter::new(Vec::new(), None);

        select_primers(
            &[PrimerRequest::forward("AT")],
            &config,
            &mut reporter,
            &ProgressReporter::new(),
        )
        .unwrap();

        let text = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert!(text.starts_with("Forward loss curve for AT:\n"));
    }

    #[test]
    fn first_write_error_is_returned_by_finish() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let config = SelectionConfigBuilder::new()
            .report_trace(true)
            .build()
            .unwrap();
        let mut reporter = ConsoleReporter::new(Vec::new(), Some(blocker));

        select_primers(
            &[PrimerRequest::forward("AT"), PrimerRequest::forward("GC")],
            &config,
            &mut reporter,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(matches!(reporter.finish(), Err(CliError::Io(_))));
    }
}

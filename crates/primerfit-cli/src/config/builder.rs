use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::{ScoringArgs, SelectArgs};
use crate::error::{CliError, Result};
use primerfit::core::scoring::loss::TemperatureRange;
use primerfit::engine::config::{SelectionConfig, SelectionConfigBuilder};
use primerfit::engine::error::EngineError;
use tracing::debug;

/// Merges command-line flags, `--set` overrides, the config file and the
/// built-in defaults, in that order of precedence.
pub fn build_config(args: &SelectArgs) -> Result<AppConfig> {
    let mut file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };
    file_config.apply_set_values(&args.set_values)?;

    let scoring_file = file_config.scoring.take().unwrap_or_default();
    let orientation_file = file_config.orientation.take().unwrap_or_default();
    let curve_file = file_config.curve.take().unwrap_or_default();
    let report_file = file_config.report.take().unwrap_or_default();

    let mut builder = SelectionConfigBuilder::new();

    if let Some(genome_length) = args.scoring.genome_length.or(scoring_file.genome_length) {
        builder = builder.genome_length(genome_length);
    }
    if let Some(scale) = args
        .scoring
        .probability_scale
        .or(scoring_file.probability_scale)
    {
        builder = builder.probability_scale(scale);
    }
    let file_target = scoring_file
        .target_tm
        .map(|[low, high]| TemperatureRange::new(low, high));
    if let Some(range) = args.scoring.target_tm.or(file_target) {
        builder = builder.target_tm(range);
    }

    if let Some(enabled) = args
        .complement
        .resolve()
        .or(orientation_file.complement_backward)
    {
        builder = builder.complement_backward(enabled);
    }

    if let Some(scale) = curve_file.probability_scale {
        builder = builder.curve_probability_scale(scale);
    }

    if args.no_summary {
        builder = builder.report_summary(false);
    } else if let Some(enabled) = report_file.summary {
        builder = builder.report_summary(enabled);
    }

    if args.trace_dir.is_some() {
        builder = builder.report_trace(true);
    } else if let Some(enabled) = report_file.trace {
        builder = builder.report_trace(enabled);
    }

    let core_config = builder.build().map_err(EngineError::from)?;
    debug!("Resolved selection configuration: {:?}", core_config);

    Ok(AppConfig {
        trace_dir: args.trace_dir.clone(),
        core_config,
    })
}

/// Builds a configuration from scoring flags alone, for commands that take
/// no config file.
pub fn build_scoring_config(
    scoring: &ScoringArgs,
    complement_backward: bool,
) -> Result<SelectionConfig> {
    let mut builder = SelectionConfigBuilder::new().complement_backward(complement_backward);
    if let Some(genome_length) = scoring.genome_length {
        builder = builder.genome_length(genome_length);
    }
    if let Some(scale) = scoring.probability_scale {
        builder = builder.probability_scale(scale);
    }
    if let Some(range) = scoring.target_tm {
        builder = builder.target_tm(range);
    }
    Ok(builder.build().map_err(EngineError::from)?)
}

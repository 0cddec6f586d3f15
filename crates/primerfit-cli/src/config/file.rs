use crate::error::{CliError, Result};
use crate::utils::parser;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileScoringConfig {
    pub genome_length: Option<u64>,
    pub probability_scale: Option<f64>,
    pub target_tm: Option<[f64; 2]>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileOrientationConfig {
    pub complement_backward: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileCurveConfig {
    pub probability_scale: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileReportConfig {
    pub summary: Option<bool>,
    pub trace: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub scoring: Option<FileScoringConfig>,
    pub orientation: Option<FileOrientationConfig>,
    pub curve: Option<FileCurveConfig>,
    pub report: Option<FileReportConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Applies `KEY=VALUE` overrides on top of the values read from file.
    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value_str) =
                parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

            match key {
                "scoring.genome-length" => {
                    self.scoring
                        .get_or_insert_with(Default::default)
                        .genome_length = Some(parse_value(key, value_str)?);
                }
                "scoring.probability-scale" => {
                    self.scoring
                        .get_or_insert_with(Default::default)
                        .probability_scale = Some(parse_value(key, value_str)?);
                }
                "scoring.target-tm" => {
                    let range = parser::parse_temperature_range(value_str)
                        .map_err(|e| CliError::Config(e.to_string()))?;
                    self.scoring.get_or_insert_with(Default::default).target_tm =
                        Some([range.low, range.high]);
                }
                "orientation.complement-backward" => {
                    self.orientation
                        .get_or_insert_with(Default::default)
                        .complement_backward = Some(parse_value(key, value_str)?);
                }
                "curve.probability-scale" => {
                    self.curve
                        .get_or_insert_with(Default::default)
                        .probability_scale = Some(parse_value(key, value_str)?);
                }
                "report.summary" => {
                    self.report.get_or_insert_with(Default::default).summary =
                        Some(parse_value(key, value_str)?);
                }
                "report.trace" => {
                    self.report.get_or_insert_with(Default::default).trace =
                        Some(parse_value(key, value_str)?);
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str.parse().map_err(|_| {
        CliError::Config(format!(
            "Invalid {} value for {}: {}",
            std::any::type_name::<T>(),
            key,
            value_str
        ))
    })
}

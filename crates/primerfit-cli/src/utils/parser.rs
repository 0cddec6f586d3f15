use primerfit::core::models::sequence::Orientation;
use primerfit::core::scoring::loss::TemperatureRange;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid temperature range '{0}'. Expected 'LOW,HIGH' (e.g., '65,75').")]
    InvalidTemperatureRange(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("{0}")]
    InvalidOrientation(String),
}

/// Parses `LOW,HIGH` (a colon or `..` separator is accepted too).
pub fn parse_temperature_range(value: &str) -> Result<TemperatureRange, ParseError> {
    let invalid = || ParseError::InvalidTemperatureRange(value.to_string());

    let (low, high) = value
        .split_once(',')
        .or_else(|| value.split_once(".."))
        .or_else(|| value.split_once(':'))
        .ok_or_else(invalid)?;

    let low: f64 = low.trim().parse().map_err(|_| invalid())?;
    let high: f64 = high.trim().parse().map_err(|_| invalid())?;
    Ok(TemperatureRange::new(low, high))
}

pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(pair.to_string())),
    }
}

pub fn parse_orientation(value: &str) -> Result<Orientation, ParseError> {
    value
        .parse()
        .map_err(|e: primerfit::core::models::sequence::OrientationParseError| {
            ParseError::InvalidOrientation(e.to_string())
        })
}

use crate::core::scoring::scorer::ScoringError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    /// Parses a single symbol, ignoring case.
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'T' => Some(Self::T),
            'G' => Some(Self::G),
            'C' => Some(Self::C),
            _ => None,
        }
    }

    #[inline]
    pub fn to_symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::G => 'G',
            Self::C => 'C',
        }
    }

    /// G and C pair through three hydrogen bonds, A and T through two.
    #[inline]
    pub fn is_strong(self) -> bool {
        matches!(self, Self::G | Self::C)
    }

    #[inline]
    pub fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::G => Self::C,
            Self::C => Self::G,
        }
    }
}

/// A validated DNA sequence over `{A, T, G, C}`, stored in uppercase.
///
/// The empty sequence is valid and represents "no primer".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(String);

impl Sequence {
    /// Parses `text`, normalizing lowercase symbols to uppercase.
    ///
    /// Fails on the first symbol outside the alphabet, reporting its position.
    pub fn parse(text: &str) -> Result<Self, ScoringError> {
        let mut normalized = String::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let base = Nucleotide::from_symbol(symbol)
                .ok_or(ScoringError::InvalidSequence { symbol, position })?;
            normalized.push(base.to_symbol());
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn nucleotides(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.chars().filter_map(Nucleotide::from_symbol)
    }

    pub fn reversed(&self) -> Self {
        Self(self.0.chars().rev().collect())
    }

    pub fn complemented(&self) -> Self {
        Self(
            self.nucleotides()
                .map(|base| base.complement().to_symbol())
                .collect(),
        )
    }

    pub fn reverse_complement(&self) -> Self {
        self.complemented().reversed()
    }
}

impl FromStr for Sequence {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unrecognized orientation '{0}'. Expected 'Forward', 'Backward', 'F' or 'B'.")]
pub struct OrientationParseError(pub String);

/// Strand read by a primer. Backward inputs are reversed before extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    Forward,
    Backward,
}

impl FromStr for Orientation {
    type Err = OrientationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "f" => Ok(Self::Forward),
            "backward" | "b" => Ok(Self::Backward),
            _ => Err(OrientationParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("Forward"),
            Self::Backward => f.write_str("Backward"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_lowercase_to_uppercase() {
        let seq = Sequence::parse("atGc").unwrap();
        assert_eq!(seq.as_str(), "ATGC");
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn parse_accepts_empty_sequence() {
        let seq = Sequence::parse("").unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn parse_reports_first_invalid_symbol_and_position() {
        let err = Sequence::parse("ATXGN").unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidSequence {
                symbol: 'X',
                position: 2
            }
        );
    }

    #[test]
    fn parse_rejects_iupac_ambiguity_codes() {
        assert!(Sequence::parse("ACGTN").is_err());
        assert!(Sequence::parse("ACGU").is_err());
    }

    #[test]
    fn reversed_reverses_symbol_order() {
        let seq = Sequence::parse("AACGT").unwrap();
        assert_eq!(seq.reversed().as_str(), "TGCAA");
    }

    #[test]
    fn complemented_swaps_watson_crick_pairs() {
        let seq = Sequence::parse("ATGC").unwrap();
        assert_eq!(seq.complemented().as_str(), "TACG");
    }

    #[test]
    fn reverse_complement_of_palindromic_site_is_itself() {
        let ecori = Sequence::parse("GAATTC").unwrap();
        assert_eq!(ecori.reverse_complement(), ecori);
    }

    #[test]
    fn nucleotide_strength_follows_gc_content() {
        assert!(Nucleotide::G.is_strong());
        assert!(Nucleotide::C.is_strong());
        assert!(!Nucleotide::A.is_strong());
        assert!(!Nucleotide::T.is_strong());
    }

    #[test]
    fn orientation_parses_full_names_and_abbreviations_ignoring_case() {
        for token in ["Forward", "forward", "FORWARD", "F", "f", " f "] {
            assert_eq!(token.parse::<Orientation>().unwrap(), Orientation::Forward);
        }
        for token in ["Backward", "backward", "B", "b"] {
            assert_eq!(token.parse::<Orientation>().unwrap(), Orientation::Backward);
        }
    }

    #[test]
    fn orientation_rejects_unknown_tokens() {
        let err = "sideways".parse::<Orientation>().unwrap_err();
        assert_eq!(err, OrientationParseError("sideways".to_string()));
    }

    #[test]
    fn orientation_displays_capitalized_name() {
        assert_eq!(Orientation::Forward.to_string(), "Forward");
        assert_eq!(Orientation::Backward.to_string(), "Backward");
    }
}

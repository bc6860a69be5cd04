//! Error types for synastry chart data.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart data validation and session mutation.
///
/// Note that an incomplete cusp set is deliberately not an error: table
/// construction reports it as "no table" (`None`) and callers check for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SynastryError {
    /// Degree outside 0..29.
    DegreeOutOfRange(u8),
    /// Arc-minute outside 0..59.
    MinuteOutOfRange(u8),
    /// Planet name was empty or whitespace-only.
    BlankPlanetName,
    /// Planet removal index past the end of the chart's list.
    PlanetIndexOutOfRange(usize),
    /// Cusp index outside the user-entered range (houses 1..6).
    CuspIndexOutOfRange(usize),
    /// Attempted to add data to a chart whose section is omitted.
    ChartOmitted(&'static str),
    /// Unrecognized sign name or index.
    UnknownSign(String),
    /// Unrecognized chart name.
    UnknownChart(String),
}

impl Display for SynastryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegreeOutOfRange(d) => write!(f, "degree {d} out of range (0-29)"),
            Self::MinuteOutOfRange(m) => write!(f, "minute {m} out of range (0-59)"),
            Self::BlankPlanetName => write!(f, "planet name must be non-empty"),
            Self::PlanetIndexOutOfRange(i) => write!(f, "no planet at index {i}"),
            Self::CuspIndexOutOfRange(i) => {
                write!(f, "cusp index {i} out of range (0-5, houses 7-12 are derived)")
            }
            Self::ChartOmitted(chart) => write!(f, "chart {chart} is omitted"),
            Self::UnknownSign(s) => write!(f, "unknown sign: {s}"),
            Self::UnknownChart(c) => write!(f, "unknown chart: {c}"),
        }
    }
}

impl Error for SynastryError {}

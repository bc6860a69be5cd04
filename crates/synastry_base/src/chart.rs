//! Chart identifiers and planet entries.
//!
//! Four fixed charts take part in a comparison: the two natal charts A
//! and B, the composite chart, and the Davison (time-space midpoint)
//! chart. All four are structurally identical; composite and Davison
//! positions are computed elsewhere and entered like any others. Chart A
//! is the anchor of the session and can never be omitted.

use std::fmt::{Display, Formatter};

use crate::error::SynastryError;
use crate::position::Position;

/// The four fixed chart slots of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    /// First natal chart (the anchor; never omitted).
    A,
    /// Second natal chart.
    B,
    /// Composite (midpoint) chart, supplied externally.
    Composite,
    /// Davison (time-space) chart, supplied externally.
    Davison,
}

/// All four charts in precedence order (A, B, Composite, Davison).
///
/// This order is the cross-chart tie-break for table rows and the column
/// order of exported sheets.
pub const ALL_CHARTS: [ChartId; 4] = [
    ChartId::A,
    ChartId::B,
    ChartId::Composite,
    ChartId::Davison,
];

impl ChartId {
    /// Display name of the chart.
    pub const fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::Composite => "Composite",
            Self::Davison => "Davison",
        }
    }

    /// 0-based index in precedence order (A=0 .. Davison=3).
    pub const fn index(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::Composite => 2,
            Self::Davison => 3,
        }
    }

    /// Whether this chart's sections may be omitted. Chart A may not.
    pub const fn can_omit(self) -> bool {
        !matches!(self, Self::A)
    }

    /// All four charts in precedence order.
    pub const fn all() -> &'static [ChartId; 4] {
        &ALL_CHARTS
    }
}

impl Display for ChartId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a chart from its display name, case-insensitive.
pub fn chart_from_name(name: &str) -> Result<ChartId, SynastryError> {
    ALL_CHARTS
        .iter()
        .copied()
        .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| SynastryError::UnknownChart(name.to_string()))
}

/// One named body in a chart's planet list.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetEntry {
    name: String,
    position: Position,
}

impl PlanetEntry {
    /// Construct an entry; the name must contain non-whitespace text.
    pub fn new(name: &str, position: Position) -> Result<PlanetEntry, SynastryError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SynastryError::BlankPlanetName);
        }
        Ok(PlanetEntry {
            name: trimmed.to_string(),
            position,
        })
    }

    /// The body's name as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The body's ecliptic position.
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Fixed-format display label: name, glyph, degree, minute.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Sign;

    #[test]
    fn chart_order_and_indices() {
        for (i, c) in ALL_CHARTS.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
    }

    #[test]
    fn only_chart_a_locked() {
        assert!(!ChartId::A.can_omit());
        assert!(ChartId::B.can_omit());
        assert!(ChartId::Composite.can_omit());
        assert!(ChartId::Davison.can_omit());
    }

    #[test]
    fn chart_name_round_trip() {
        for c in ALL_CHARTS {
            assert_eq!(chart_from_name(c.name()), Ok(c));
        }
    }

    #[test]
    fn chart_name_case_insensitive() {
        assert_eq!(chart_from_name("davison"), Ok(ChartId::Davison));
        assert_eq!(chart_from_name(" composite "), Ok(ChartId::Composite));
        assert!(matches!(
            chart_from_name("C"),
            Err(SynastryError::UnknownChart(_))
        ));
    }

    #[test]
    fn planet_entry_rejects_blank_name() {
        let p = Position::new(Sign::Aries, 0, 0).expect("valid");
        assert_eq!(PlanetEntry::new("", p), Err(SynastryError::BlankPlanetName));
        assert_eq!(
            PlanetEntry::new("   ", p),
            Err(SynastryError::BlankPlanetName)
        );
    }

    #[test]
    fn planet_entry_trims_name() {
        let p = Position::new(Sign::Leo, 3, 4).expect("valid");
        let entry = PlanetEntry::new("  Sun ", p).expect("valid name");
        assert_eq!(entry.name(), "Sun");
    }

    #[test]
    fn planet_label_format() {
        let p = Position::new(Sign::Gemini, 15, 0).expect("valid");
        let entry = PlanetEntry::new("Moon", p).expect("valid name");
        assert_eq!(entry.label(), "Moon \u{264a} 15\u{b0}0\u{2032}");
    }
}

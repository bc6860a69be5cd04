//! Ecliptic positions expressed as sign + degree + arc-minute.
//!
//! Chart data arrives as whole degrees (0..29) and arc-minutes (0..59)
//! within a sign; no seconds, no ephemeris. The continuous form is the
//! longitude in [0, 360) used by the house resolver.

use std::fmt::{Display, Formatter};

use crate::error::SynastryError;
use crate::zodiac::Sign;

/// A point on the ecliptic: sign, whole degree within the sign, arc-minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    sign: Sign,
    degree: u8,
    minute: u8,
}

impl Position {
    /// Construct a position, validating degree (0..29) and minute (0..59).
    pub const fn new(sign: Sign, degree: u8, minute: u8) -> Result<Position, SynastryError> {
        if degree > 29 {
            return Err(SynastryError::DegreeOutOfRange(degree));
        }
        if minute > 59 {
            return Err(SynastryError::MinuteOutOfRange(minute));
        }
        Ok(Position {
            sign,
            degree,
            minute,
        })
    }

    /// The sign this position falls in.
    pub const fn sign(self) -> Sign {
        self.sign
    }

    /// Whole degrees within the sign (0..29).
    pub const fn degree(self) -> u8 {
        self.degree
    }

    /// Arc-minutes (0..59).
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Continuous ecliptic longitude in degrees, [0, 360).
    ///
    /// `sign_index * 30 + degree + minute / 60`.
    pub fn longitude(self) -> f64 {
        (self.sign.index() as f64) * 30.0 + (self.degree as f64) + (self.minute as f64) / 60.0
    }

    /// The position with the same degree/minute in the opposite sign.
    ///
    /// Always valid: the degree/minute ranges are sign-independent.
    pub const fn opposite(self) -> Position {
        Position {
            sign: self.sign.opposite(),
            degree: self.degree,
            minute: self.minute,
        }
    }
}

impl Display for Position {
    /// Fixed label format: glyph, degree, minute — e.g. `♊ 15°0′`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}\u{b0}{}\u{2032}",
            self.sign.glyph(),
            self.degree,
            self.minute
        )
    }
}

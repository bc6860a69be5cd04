//! The zodiac sign table and sign arithmetic.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Opposite signs sit 6 places (180 deg)
//! apart; the derived-house rule is built on that pairing.

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode glyph used in planet and house labels.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Aries => "\u{2648}",
            Self::Taurus => "\u{2649}",
            Self::Gemini => "\u{264a}",
            Self::Cancer => "\u{264b}",
            Self::Leo => "\u{264c}",
            Self::Virgo => "\u{264d}",
            Self::Libra => "\u{264e}",
            Self::Scorpio => "\u{264f}",
            Self::Sagittarius => "\u{2650}",
            Self::Capricorn => "\u{2651}",
            Self::Aquarius => "\u{2652}",
            Self::Pisces => "\u{2653}",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign from a 0-based index, `None` if out of range.
    pub const fn from_index(index: u8) -> Option<Sign> {
        if index < 12 {
            Some(ALL_SIGNS[index as usize])
        } else {
            None
        }
    }

    /// The diametrically opposite sign, 6 places away modulo 12.
    ///
    /// Aries <-> Libra, Taurus <-> Scorpio, and so on. An involution.
    pub const fn opposite(self) -> Sign {
        ALL_SIGNS[((self.index() + 6) % 12) as usize]
    }

    /// All 12 signs in order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

/// Parse a sign from its English name, case-insensitive.
pub fn sign_from_name(name: &str) -> Option<Sign> {
    ALL_SIGNS
        .iter()
        .copied()
        .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
}

//! Core chart-data model for the synastry house-placement engine.
//!
//! This crate provides:
//! - The zodiac sign table and opposite-sign arithmetic
//! - Sign/degree/minute positions and their ecliptic longitudes
//! - House cusp sets with opposite-point derivation of houses 7-12
//! - Chart identifiers and planet entries
//!
//! Everything here is pure, dependency-free computation over values
//! supplied by data entry; no ephemeris is involved anywhere.

pub mod chart;
pub mod cusps;
pub mod error;
pub mod position;
pub mod zodiac;

pub use chart::{ALL_CHARTS, ChartId, PlanetEntry, chart_from_name};
pub use cusps::{CuspSet, derive_opposite_cusps};
pub use error::SynastryError;
pub use position::Position;
pub use zodiac::{ALL_SIGNS, Sign, sign_from_name};

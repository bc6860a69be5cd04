//! House cusp sets: the 12 boundary positions of one chart's houses.
//!
//! Houses 1..6 are entered by hand; houses 7..12 are always derived as the
//! opposite sign of the house six places earlier, at the same degree and
//! minute. A set with any missing slot is incomplete and cannot be used
//! for house resolution. Nothing here requires the cusps to be monotonic
//! around the circle; manual entry may produce any arrangement and the
//! resolver works from local start/end pairs only.

use crate::position::Position;

/// The 12 house cusps of one chart, slots 0..11 for houses 1..12.
///
/// Slots are `None` until populated. The set participates in house
/// resolution only when all 12 slots are present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CuspSet {
    slots: [Option<Position>; 12],
}

impl CuspSet {
    /// An empty set with all 12 slots absent.
    pub const fn empty() -> CuspSet {
        CuspSet { slots: [None; 12] }
    }

    /// Cusp of house `index + 1`, if present.
    pub fn get(&self, index: usize) -> Option<Position> {
        self.slots.get(index).copied().flatten()
    }

    /// Set the cusp of house `index + 1`.
    pub fn set(&mut self, index: usize, position: Position) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(position);
        }
    }

    /// Clear all 12 slots.
    pub fn clear(&mut self) {
        self.slots = [None; 12];
    }

    /// Whether all 12 cusps are present.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The first six cusps (houses 1..6), if all are present.
    pub fn first_six(&self) -> Option<[Position; 6]> {
        let mut out = [self.slots[0]?; 6];
        for (i, slot) in self.slots[1..6].iter().enumerate() {
            out[i + 1] = (*slot)?;
        }
        Some(out)
    }

    /// All 12 cusps as longitudes, `None` unless the set is complete.
    pub fn longitudes(&self) -> Option<[f64; 12]> {
        let mut out = [0.0; 12];
        for (i, slot) in self.slots.iter().enumerate() {
            out[i] = (*slot)?.longitude();
        }
        Some(out)
    }

    /// Derive houses 7..12 from houses 1..6 and write them into the set.
    ///
    /// Does nothing unless all of houses 1..6 are present. Idempotent:
    /// re-deriving from the same first six cusps overwrites slots 6..11
    /// with identical values.
    pub fn refresh_derived(&mut self) {
        let Some(first_six) = self.first_six() else {
            return;
        };
        for (i, derived) in derive_opposite_cusps(&first_six).iter().enumerate() {
            self.slots[i + 6] = Some(*derived);
        }
    }
}

/// Houses 7..12 from houses 1..6: opposite sign, identical degree/minute.
///
/// The classical opposite-point rule: each house cusp sits exactly 180 deg
/// from the cusp six houses earlier.
pub fn derive_opposite_cusps(first_six: &[Position; 6]) -> [Position; 6] {
    let mut out = *first_six;
    for cusp in &mut out {
        *cusp = cusp.opposite();
    }
    out
}

//! Circular house containment: which house a longitude falls in.
//!
//! House i spans from cusps[i] forward to cusps[(i+1) % 12]. A house whose
//! end is numerically below its start crosses the 0-degree point of the
//! circle; both the end and the query are lifted by 360 as needed so the
//! comparison happens on an unwrapped segment. Each house is judged from
//! its own local start/end pair, so a cusp set that is not monotonic
//! around the circle is still accepted and resolved house by house.

/// Resolution result: the containing house and the offset past its cusp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HousePlacement {
    /// 0-based house index (0 = house 1, 11 = house 12).
    pub house: usize,
    /// Angular distance from the house cusp to the position, in [0, 360).
    ///
    /// For a well-formed cusp set this is the offset into the house; it
    /// orders planets within a house in the merged table.
    pub distance: f64,
}

/// Find the house containing `lon` among the 12 cusp longitudes.
///
/// Houses are scanned in order 0..11 and the first match wins. If no
/// house matches — possible only for degenerate input such as duplicate
/// cusps — house 11 is returned. That fallback is a deliberate policy:
/// manual entry always produces output rather than a rejection.
pub fn find_house(lon: f64, cusps: &[f64; 12]) -> HousePlacement {
    for i in 0..12 {
        let start = cusps[i];
        let mut end = cusps[(i + 1) % 12];
        let mut p = lon;
        if end < start {
            // This house crosses the 0-degree point.
            end += 360.0;
        }
        if p < start {
            p += 360.0;
        }
        if start <= p && p < end {
            return HousePlacement {
                house: i,
                distance: cusp_distance(lon, start),
            };
        }
    }
    HousePlacement {
        house: 11,
        distance: cusp_distance(lon, cusps[11]),
    }
}

/// Forward angular distance from a cusp to a position, in [0, 360).
fn cusp_distance(lon: f64, cusp: f64) -> f64 {
    let mut d = lon - cusp;
    if d < 0.0 {
        d += 360.0;
    }
    d
}

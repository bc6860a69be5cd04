//! JSON chart-file loading: the data-entry boundary of the CLI.
//!
//! A chart file maps chart names ("A", "B", "Composite", "Davison") to
//! entered houses, planets, and omit flags. Houses come as 6 entries
//! (houses 1-6, with 7-12 derived as opposite points) or as all 12, in
//! which case the upper six must agree with the derivation; any other
//! count is rejected. Omitting a section and supplying data for it in
//! the same file is contradictory and rejected outright.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use synastry_base::{ChartId, Position, chart_from_name, sign_from_name};
use synastry_session::Session;

/// One position as written in the file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PositionSpec {
    sign: String,
    degree: u8,
    minute: u8,
}

/// One planet as written in the file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanetSpec {
    name: String,
    sign: String,
    degree: u8,
    minute: u8,
}

/// One chart's section of the file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartSpec {
    #[serde(default)]
    houses: Vec<PositionSpec>,
    #[serde(default)]
    planets: Vec<PlanetSpec>,
    #[serde(default)]
    omit_houses: bool,
    #[serde(default)]
    omit_planets: bool,
}

fn to_position(sign: &str, degree: u8, minute: u8, context: &str) -> Result<Position, String> {
    let sign =
        sign_from_name(sign).ok_or_else(|| format!("{context}: unknown sign: {sign}"))?;
    Position::new(sign, degree, minute).map_err(|e| format!("{context}: {e}"))
}

impl PositionSpec {
    fn to_position(&self, context: &str) -> Result<Position, String> {
        to_position(&self.sign, self.degree, self.minute, context)
    }
}

impl PlanetSpec {
    fn to_position(&self, context: &str) -> Result<Position, String> {
        to_position(&self.sign, self.degree, self.minute, context)
    }
}

/// Load and validate a chart file into a fresh session.
pub fn load_session(path: &Path) -> Result<Session, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let specs: BTreeMap<String, ChartSpec> =
        serde_json::from_str(&text).map_err(|e| format!("invalid chart file: {e}"))?;

    let mut session = Session::new();
    for (name, spec) in &specs {
        let id = chart_from_name(name).map_err(|e| e.to_string())?;
        apply_chart(&mut session, id, spec)?;
    }
    Ok(session)
}

fn apply_chart(session: &mut Session, id: ChartId, spec: &ChartSpec) -> Result<(), String> {
    let chart = id.name();

    if (spec.omit_houses || spec.omit_planets) && !id.can_omit() {
        return Err(format!("chart {chart} cannot be omitted"));
    }
    if spec.omit_houses && !spec.houses.is_empty() {
        return Err(format!("chart {chart}: houses given but omit_houses is set"));
    }
    if spec.omit_planets && !spec.planets.is_empty() {
        return Err(format!("chart {chart}: planets given but omit_planets is set"));
    }

    match spec.houses.len() {
        0 => {}
        6 | 12 => {
            for (i, cusp) in spec.houses.iter().take(6).enumerate() {
                let position = cusp.to_position(&format!("chart {chart} house {}", i + 1))?;
                session
                    .set_cusp(id, i, position)
                    .map_err(|e| format!("chart {chart}: {e}"))?;
            }
            if spec.houses.len() == 12 {
                check_upper_houses(session, id, spec)?;
            }
        }
        n => {
            return Err(format!(
                "chart {chart}: expected 6 or 12 houses, got {n}"
            ));
        }
    }

    for planet in &spec.planets {
        let position = planet.to_position(&format!("chart {chart} planet {}", planet.name))?;
        session
            .add_planet(id, &planet.name, position)
            .map_err(|e| format!("chart {chart}: {e}"))?;
    }

    session.set_houses_omitted(id, spec.omit_houses);
    session.set_planets_omitted(id, spec.omit_planets);
    Ok(())
}

/// When all 12 houses are written out, houses 7-12 must be the opposite
/// points of houses 1-6 (same degree/minute, opposite sign).
fn check_upper_houses(session: &Session, id: ChartId, spec: &ChartSpec) -> Result<(), String> {
    let chart = id.name();
    for (i, cusp) in spec.houses.iter().enumerate().skip(6) {
        let written = cusp.to_position(&format!("chart {chart} house {}", i + 1))?;
        let derived = session
            .chart(id)
            .cusps()
            .get(i)
            .ok_or_else(|| format!("chart {chart}: houses 1-6 incomplete"))?;
        if written != derived {
            return Err(format!(
                "chart {chart}: house {} is {written}, but the opposite point of house {} is {derived}",
                i + 1,
                i - 5
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use synastry_base::Sign;

    fn load_str(json: &str) -> Result<Session, String> {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "synastry_chart_file_test_{}_{n}.json",
            std::process::id()
        ));
        fs::write(&path, json).expect("write temp file");
        let result = load_session(&path);
        let _ = fs::remove_file(&path);
        result
    }

    const SIX_HOUSES: &str = r#"
        "houses": [
            {"sign": "Aries", "degree": 0, "minute": 0},
            {"sign": "Taurus", "degree": 0, "minute": 0},
            {"sign": "Gemini", "degree": 0, "minute": 0},
            {"sign": "Cancer", "degree": 0, "minute": 0},
            {"sign": "Leo", "degree": 0, "minute": 0},
            {"sign": "Virgo", "degree": 0, "minute": 0}
        ]
    "#;

    #[test]
    fn six_houses_derive_the_rest() {
        let session = load_str(&format!(r#"{{"A": {{{SIX_HOUSES}}}}}"#)).expect("valid file");
        let cusps = session.chart(ChartId::A).cusps();
        assert!(cusps.is_complete());
        assert_eq!(cusps.get(6).map(|p| p.sign()), Some(Sign::Libra));
    }

    #[test]
    fn planets_loaded_in_order() {
        let json = r#"{"A": {"planets": [
            {"name": "Sun", "sign": "Leo", "degree": 1, "minute": 2},
            {"name": "Moon", "sign": "Cancer", "degree": 3, "minute": 4}
        ]}}"#;
        let session = load_str(json).expect("valid file");
        let planets = session.chart(ChartId::A).planets();
        assert_eq!(planets.len(), 2);
        assert_eq!(planets[0].name(), "Sun");
        assert_eq!(planets[1].name(), "Moon");
    }

    #[test]
    fn unknown_chart_key_rejected() {
        let err = load_str(r#"{"X": {}}"#).expect_err("unknown chart");
        assert!(err.contains("unknown chart"), "{err}");
    }

    #[test]
    fn unknown_sign_rejected() {
        let json = r#"{"A": {"planets": [
            {"name": "Sun", "sign": "Ophiuchus", "degree": 0, "minute": 0}
        ]}}"#;
        let err = load_str(json).expect_err("unknown sign");
        assert!(err.contains("unknown sign"), "{err}");
    }

    #[test]
    fn wrong_house_count_rejected() {
        let json = r#"{"A": {"houses": [{"sign": "Aries", "degree": 0, "minute": 0}]}}"#;
        let err = load_str(json).expect_err("wrong count");
        assert!(err.contains("expected 6 or 12"), "{err}");
    }

    #[test]
    fn twelve_houses_must_match_derivation() {
        let mut houses = Vec::new();
        for sign in ["Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo"] {
            houses.push(format!(r#"{{"sign": "{sign}", "degree": 0, "minute": 0}}"#));
        }
        // House 7 should be Libra; write Scorpio instead.
        for sign in [
            "Scorpio",
            "Scorpio",
            "Sagittarius",
            "Capricorn",
            "Aquarius",
            "Pisces",
        ] {
            houses.push(format!(r#"{{"sign": "{sign}", "degree": 0, "minute": 0}}"#));
        }
        let json = format!(r#"{{"A": {{"houses": [{}]}}}}"#, houses.join(","));
        let err = load_str(&json).expect_err("inconsistent upper houses");
        assert!(err.contains("opposite point"), "{err}");
    }

    #[test]
    fn omit_with_data_is_contradictory() {
        let json = format!(r#"{{"B": {{{SIX_HOUSES}, "omit_houses": true}}}}"#);
        let err = load_str(&json).expect_err("contradictory");
        assert!(err.contains("omit_houses"), "{err}");
    }

    #[test]
    fn chart_a_cannot_be_omitted() {
        let err = load_str(r#"{"A": {"omit_houses": true}}"#).expect_err("chart A locked");
        assert!(err.contains("cannot be omitted"), "{err}");
    }

    #[test]
    fn omit_flags_applied() {
        let json = r#"{"B": {"omit_houses": true, "omit_planets": true}}"#;
        let session = load_str(json).expect("valid file");
        assert!(session.chart(ChartId::B).houses_omitted());
        assert!(session.chart(ChartId::B).planets_omitted());
    }

    #[test]
    fn degree_out_of_range_rejected() {
        let json = r#"{"A": {"planets": [
            {"name": "Sun", "sign": "Leo", "degree": 30, "minute": 0}
        ]}}"#;
        let err = load_str(json).expect_err("bad degree");
        assert!(err.contains("out of range"), "{err}");
    }
}

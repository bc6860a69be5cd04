//! Session state: the four charts' cusps, planets, and omit flags.
//!
//! The session is an explicit value owned by the caller (a CLI run, a UI
//! surface); the table engine is a pure function of data borrowed from
//! it. Mutations mirror the data-entry steps: cusps 1..6 are entered and
//! houses 7..12 derived, planets are appended and removed by index, and
//! omitting a section clears its data.

use synastry_base::{ALL_CHARTS, ChartId, CuspSet, PlanetEntry, Position, SynastryError};

/// One chart's entered data and omit flags.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    cusps: CuspSet,
    planets: Vec<PlanetEntry>,
    houses_omitted: bool,
    planets_omitted: bool,
}

impl ChartState {
    /// The chart's house cusps.
    pub fn cusps(&self) -> &CuspSet {
        &self.cusps
    }

    /// The chart's planets, in entry order.
    pub fn planets(&self) -> &[PlanetEntry] {
        &self.planets
    }

    /// Whether the houses section is omitted.
    pub fn houses_omitted(&self) -> bool {
        self.houses_omitted
    }

    /// Whether the planets section is omitted.
    pub fn planets_omitted(&self) -> bool {
        self.planets_omitted
    }
}

/// The full data-entry state of one comparison session.
#[derive(Debug, Clone)]
pub struct Session {
    charts: [ChartState; 4],
    /// Currently selected reference chart.
    mode: ChartId,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            charts: [
                ChartState::default(),
                ChartState::default(),
                ChartState::default(),
                ChartState::default(),
            ],
            mode: ChartId::A,
        }
    }
}

impl Session {
    /// A fresh session: all charts empty, chart A selected.
    pub fn new() -> Session {
        Session::default()
    }

    /// One chart's state.
    pub fn chart(&self, id: ChartId) -> &ChartState {
        &self.charts[id.index() as usize]
    }

    fn chart_mut(&mut self, id: ChartId) -> &mut ChartState {
        &mut self.charts[id.index() as usize]
    }

    /// The currently selected reference chart.
    pub fn mode(&self) -> ChartId {
        self.mode
    }

    /// Select the reference chart for display.
    pub fn select_mode(&mut self, id: ChartId) {
        self.mode = id;
    }

    /// Enter the cusp of house `index + 1` (only houses 1..6 are entered;
    /// houses 7..12 follow by derivation).
    ///
    /// Rejected when the chart's houses are omitted. Houses 7..12 are
    /// refreshed immediately once all of 1..6 are present.
    pub fn set_cusp(
        &mut self,
        id: ChartId,
        index: usize,
        position: Position,
    ) -> Result<(), SynastryError> {
        if index >= 6 {
            return Err(SynastryError::CuspIndexOutOfRange(index));
        }
        let state = self.chart_mut(id);
        if state.houses_omitted {
            return Err(SynastryError::ChartOmitted(id.name()));
        }
        state.cusps.set(index, position);
        state.cusps.refresh_derived();
        Ok(())
    }

    /// Append a planet to a chart's list.
    ///
    /// Rejected when the chart's planets are omitted or the name is blank.
    pub fn add_planet(
        &mut self,
        id: ChartId,
        name: &str,
        position: Position,
    ) -> Result<(), SynastryError> {
        let entry = PlanetEntry::new(name, position)?;
        let state = self.chart_mut(id);
        if state.planets_omitted {
            return Err(SynastryError::ChartOmitted(id.name()));
        }
        state.planets.push(entry);
        Ok(())
    }

    /// Remove a planet by its index in entry order.
    pub fn remove_planet(&mut self, id: ChartId, index: usize) -> Result<(), SynastryError> {
        let state = self.chart_mut(id);
        if index >= state.planets.len() {
            return Err(SynastryError::PlanetIndexOutOfRange(index));
        }
        state.planets.remove(index);
        Ok(())
    }

    /// Set a chart's houses-omitted flag. Omitting clears all 12 cusps.
    ///
    /// Chart A cannot be omitted; requests against it are ignored, the
    /// same shape as the entry UI never offering the toggle.
    pub fn set_houses_omitted(&mut self, id: ChartId, omitted: bool) {
        if !id.can_omit() {
            return;
        }
        let state = self.chart_mut(id);
        state.houses_omitted = omitted;
        if omitted {
            state.cusps.clear();
        }
    }

    /// Set a chart's planets-omitted flag. Omitting clears the planet list.
    ///
    /// Chart A cannot be omitted; requests against it are ignored.
    pub fn set_planets_omitted(&mut self, id: ChartId, omitted: bool) {
        if !id.can_omit() {
            return;
        }
        let state = self.chart_mut(id);
        state.planets_omitted = omitted;
        if omitted {
            state.planets.clear();
        }
    }

    /// The reference chart to display: the selected mode if its houses are
    /// available, else the first chart whose houses are not omitted.
    ///
    /// `None` means every chart's houses are omitted — an actionable state
    /// the caller must surface ("enable at least one chart"), never a
    /// reason to invoke the engine.
    pub fn active_reference(&self) -> Option<ChartId> {
        if !self.chart(self.mode).houses_omitted {
            return Some(self.mode);
        }
        ALL_CHARTS
            .iter()
            .copied()
            .find(|id| !self.chart(*id).houses_omitted)
    }

    /// Charts whose houses are not omitted, in precedence order: the set
    /// of reference charts a full export walks.
    pub fn usable_references(&self) -> Vec<ChartId> {
        ALL_CHARTS
            .iter()
            .copied()
            .filter(|id| !self.chart(*id).houses_omitted)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synastry_base::Sign;

    fn pos(sign: Sign, d: u8, m: u8) -> Position {
        Position::new(sign, d, m).expect("valid position")
    }

    fn fill_first_six(session: &mut Session, id: ChartId) {
        let signs = [
            Sign::Aries,
            Sign::Taurus,
            Sign::Gemini,
            Sign::Cancer,
            Sign::Leo,
            Sign::Virgo,
        ];
        for (i, sign) in signs.iter().enumerate() {
            session.set_cusp(id, i, pos(*sign, 0, 0)).expect("cusp set");
        }
    }

    #[test]
    fn cusp_entry_derives_upper_houses() {
        let mut session = Session::new();
        fill_first_six(&mut session, ChartId::A);
        let cusps = session.chart(ChartId::A).cusps();
        assert!(cusps.is_complete());
        assert_eq!(cusps.get(6).map(|p| p.sign()), Some(Sign::Libra));
        assert_eq!(cusps.get(11).map(|p| p.sign()), Some(Sign::Pisces));
    }

    #[test]
    fn upper_cusp_entry_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.set_cusp(ChartId::A, 6, pos(Sign::Libra, 0, 0)),
            Err(SynastryError::CuspIndexOutOfRange(6))
        );
    }

    #[test]
    fn partial_cusps_do_not_derive() {
        let mut session = Session::new();
        session
            .set_cusp(ChartId::A, 0, pos(Sign::Aries, 0, 0))
            .expect("cusp set");
        assert!(!session.chart(ChartId::A).cusps().is_complete());
        assert_eq!(session.chart(ChartId::A).cusps().get(6), None);
    }

    #[test]
    fn omit_houses_clears_cusps() {
        let mut session = Session::new();
        fill_first_six(&mut session, ChartId::B);
        session.set_houses_omitted(ChartId::B, true);
        assert!(session.chart(ChartId::B).houses_omitted());
        assert!(!session.chart(ChartId::B).cusps().is_complete());
        assert_eq!(session.chart(ChartId::B).cusps().get(0), None);
    }

    #[test]
    fn omit_planets_clears_list() {
        let mut session = Session::new();
        session
            .add_planet(ChartId::Composite, "Sun", pos(Sign::Leo, 1, 2))
            .expect("planet added");
        session.set_planets_omitted(ChartId::Composite, true);
        assert!(session.chart(ChartId::Composite).planets().is_empty());
    }

    #[test]
    fn chart_a_ignores_omission() {
        let mut session = Session::new();
        fill_first_six(&mut session, ChartId::A);
        session.set_houses_omitted(ChartId::A, true);
        assert!(!session.chart(ChartId::A).houses_omitted());
        assert!(session.chart(ChartId::A).cusps().is_complete());
    }

    #[test]
    fn omitted_chart_rejects_new_data() {
        let mut session = Session::new();
        session.set_houses_omitted(ChartId::B, true);
        session.set_planets_omitted(ChartId::B, true);
        assert_eq!(
            session.set_cusp(ChartId::B, 0, pos(Sign::Aries, 0, 0)),
            Err(SynastryError::ChartOmitted("B"))
        );
        assert_eq!(
            session.add_planet(ChartId::B, "Sun", pos(Sign::Leo, 0, 0)),
            Err(SynastryError::ChartOmitted("B"))
        );
    }

    #[test]
    fn add_and_remove_planets_by_index() {
        let mut session = Session::new();
        session
            .add_planet(ChartId::A, "Sun", pos(Sign::Leo, 1, 0))
            .expect("added");
        session
            .add_planet(ChartId::A, "Moon", pos(Sign::Cancer, 2, 0))
            .expect("added");
        session.remove_planet(ChartId::A, 0).expect("removed");
        let planets = session.chart(ChartId::A).planets();
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].name(), "Moon");
        assert_eq!(
            session.remove_planet(ChartId::A, 5),
            Err(SynastryError::PlanetIndexOutOfRange(5))
        );
    }

    #[test]
    fn blank_planet_name_rejected() {
        let mut session = Session::new();
        assert_eq!(
            session.add_planet(ChartId::A, "  ", pos(Sign::Leo, 0, 0)),
            Err(SynastryError::BlankPlanetName)
        );
    }

    #[test]
    fn active_reference_prefers_mode() {
        let mut session = Session::new();
        session.select_mode(ChartId::Composite);
        assert_eq!(session.active_reference(), Some(ChartId::Composite));
    }

    #[test]
    fn active_reference_falls_back_when_mode_omitted() {
        let mut session = Session::new();
        session.select_mode(ChartId::B);
        session.set_houses_omitted(ChartId::B, true);
        assert_eq!(session.active_reference(), Some(ChartId::A));
    }

    #[test]
    fn usable_references_skip_omitted() {
        let mut session = Session::new();
        session.set_houses_omitted(ChartId::B, true);
        session.set_houses_omitted(ChartId::Davison, true);
        assert_eq!(
            session.usable_references(),
            vec![ChartId::A, ChartId::Composite]
        );
    }
}

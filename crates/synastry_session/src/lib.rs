//! Explicit session state for one chart-comparison run.
//!
//! Owns the four charts' entered cusps, planet lists, and omit flags,
//! plus the selected reference chart. The table engine never reads this
//! directly; callers borrow slices out of it and hand them over.

pub mod session;

pub use session::{ChartState, Session};

//! House placement and multi-chart table merge.
//!
//! This crate provides:
//! - The circular house resolver (containment + cusp distance)
//! - The merge engine that places planets from up to four charts into
//!   one reference chart's houses and produces the sorted synastry table
//!
//! Both are pure functions over data from `synastry_base`; session state
//! and rendering live elsewhere.

pub mod resolver;
pub mod table;
pub mod table_types;

pub use resolver::{HousePlacement, find_house};
pub use table::build_table;
pub use table_types::{ChartColumn, EMPTY_CELL, SynastryTable, TableRow};

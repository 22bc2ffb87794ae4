//! Imaging, analysis, and dashboard-data core for the GeoInsight platform.
//!
//! The modules mirror the hosted satellite-analysis dashboard while providing
//! typed chart specifications, a fail-soft analysis client, and well-defined
//! display modules.

pub mod analysis;
pub mod charts;
pub mod imaging;
pub mod modules;
pub mod prelude;
pub mod scenario;
pub mod telemetry;

pub use prelude::{DisplayModule, ModuleKind, ModuleView};

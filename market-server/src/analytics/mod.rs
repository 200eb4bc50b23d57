//! Analytics
//!
//! Time-windowed, bucketed seller reports with period-over-period
//! percentage change. [`windows`] resolves report time ranges in the
//! business timezone, [`reports`] holds the pure reducers, and
//! [`service`] wires them to the repositories. The aggregator is a pure
//! read-side reducer: it never mutates anything.

pub mod reports;
pub mod service;
pub mod windows;

pub use reports::percentage_change;
pub use service::AnalyticsService;
pub use windows::Window;

//! Utility module — shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] — application error handling
//! - [`logger`] — tracing setup
//! - [`time`] — business-timezone conversions

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResponse, AppResult};

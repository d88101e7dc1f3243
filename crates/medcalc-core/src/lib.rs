//! medcalc-core
//!
//! Shared vocabulary of the medcalc system: score metadata, parameter
//! declarations and the result envelope every calculator returns.
//! No HTTP or scoring logic lives here.

pub mod error;
pub mod models;

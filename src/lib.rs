//! `sales-peak` library crate.
//!
//! The binary (`sales`) is a thin wrapper around this library so that:
//!
//! - validation and peak logic is testable without spawning processes
//! - the analyzer can be embedded behind other front ends (upload handlers, notebooks)
//! - chart documents can be produced and rendered independently

pub mod analysis;
pub mod app;
pub mod chart;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;

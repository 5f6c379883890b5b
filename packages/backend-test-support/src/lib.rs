//! Test support for the fee forwarder.
//!
//! Logging bootstrap, problem-details assertions and request fixtures for
//! integration tests. Nothing here depends on the forwarder crate itself,
//! so fixtures are plain JSON.

pub mod fixtures;
pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

//! Request payload model shared by the HTTP layer and the forwarder.

pub mod payload;

pub use payload::{InboundPayload, Round};

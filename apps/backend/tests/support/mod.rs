#![allow(dead_code)]

pub mod app_builder;
pub mod recording_transport;

pub use app_builder::{create_test_app, test_forwarder_config, test_state};
pub use recording_transport::RecordingTransport;

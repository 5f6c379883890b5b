//! Process-wide JSON logging for the forwarder binary.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Applied when `RUST_LOG` is unset or unparsable. The HTTP client stack
/// that talks to Service Bus stays at warn.
const DEFAULT_FILTER: &str =
    "info,fee_forwarder=info,actix_web=info,reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn";

/// One flat JSON object per event. Fields of the enclosing `request` span
/// (`trace_id`, `method`, `path`) are included under `span`.
pub fn init_tracing() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .try_init()
}

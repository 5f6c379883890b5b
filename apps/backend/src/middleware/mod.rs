pub mod request_trace;
pub mod structured_logger;
pub mod trace_span;

pub use request_trace::RequestTrace;
pub use structured_logger::{RequestOutcome, StructuredLogger};
pub use trace_span::TraceSpan;

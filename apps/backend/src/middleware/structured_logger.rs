//! Per-request completion log.
//!
//! Handlers and `AppError` tag the response with a [`RequestOutcome`];
//! `StructuredLogger` reads that tag back once the response is built and
//! writes a single `request_completed` event saying what happened to the
//! round. Runs inside the `RequestTrace` scope, so the trace id comes from
//! `trace_ctx`.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpResponse};
use futures_util::future::LocalBoxFuture;
use tracing::{event, Level};

use crate::error::AppError;
use crate::trace_ctx;

/// What the service did with a request, as recorded on its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Forwarded { round_id: i64 },
    Rejected { round_id: Option<i64> },
    InvalidInput,
    QueueFailure,
    Internal,
}

impl RequestOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forwarded { .. } => "forwarded",
            Self::Rejected { .. } => "rejected",
            Self::InvalidInput => "invalid_input",
            Self::QueueFailure => "queue_failure",
            Self::Internal => "internal",
        }
    }

    pub fn round_id(&self) -> Option<i64> {
        match self {
            Self::Forwarded { round_id } => Some(*round_id),
            Self::Rejected { round_id } => *round_id,
            _ => None,
        }
    }

    /// Tag `response` so the completion log can report this outcome.
    pub fn attach(self, mut response: HttpResponse) -> HttpResponse {
        response.extensions_mut().insert(self);
        response
    }
}

impl From<&AppError> for RequestOutcome {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::BadRequest { .. } => Self::InvalidInput,
            AppError::Queue { .. } => Self::QueueFailure,
            AppError::Config { .. } | AppError::Internal { .. } => Self::Internal,
        }
    }
}

/// Gate rejections are normal traffic and stay at info. Untagged responses
/// (health checks, unknown routes) fall back to the status class.
fn completion_level(outcome: Option<&RequestOutcome>, status: StatusCode) -> Level {
    match outcome {
        Some(RequestOutcome::QueueFailure | RequestOutcome::Internal) => Level::ERROR,
        Some(RequestOutcome::InvalidInput) => Level::WARN,
        Some(RequestOutcome::Forwarded { .. } | RequestOutcome::Rejected { .. }) => Level::INFO,
        None if status.is_server_error() => Level::ERROR,
        None if status.is_client_error() => Level::WARN,
        None => Level::INFO,
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, outcome) = match &result {
                Ok(res) => (
                    res.status(),
                    res.response().extensions().get::<RequestOutcome>().copied(),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            let completed = Completed {
                method: method.as_str(),
                path: &path,
                status,
                outcome,
                elapsed_ms: started.elapsed().as_millis() as u64,
            };
            completed.log();

            result
        })
    }
}

struct Completed<'a> {
    method: &'a str,
    path: &'a str,
    status: StatusCode,
    outcome: Option<RequestOutcome>,
    elapsed_ms: u64,
}

impl Completed<'_> {
    fn log(&self) {
        let trace_id = trace_ctx::trace_id();
        let outcome = self.outcome.as_ref().map_or("none", RequestOutcome::as_str);
        let round_id = self.outcome.as_ref().and_then(RequestOutcome::round_id);
        let status = self.status.as_u16();
        let (method, path, elapsed_ms) = (self.method, self.path, self.elapsed_ms);

        macro_rules! completed {
            ($level:expr) => {
                event!(
                    $level,
                    %trace_id,
                    http.method = method,
                    url.path = path,
                    http.status_code = status,
                    outcome,
                    round_id = ?round_id,
                    elapsed_ms,
                    "request_completed"
                )
            };
        }

        let level = completion_level(self.outcome.as_ref(), self.status);
        if level == Level::ERROR {
            completed!(Level::ERROR);
        } else if level == Level::WARN {
            completed!(Level::WARN);
        } else {
            completed!(Level::INFO);
        }
    }
}

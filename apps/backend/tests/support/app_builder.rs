use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use fee_forwarder::config::ForwarderConfig;
use fee_forwarder::infra::state::build_state;
use fee_forwarder::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use fee_forwarder::routes;
use fee_forwarder::servicebus::{QueueTransport, ServiceBusConnection};
use fee_forwarder::state::AppState;

pub const TEST_QUEUE: &str = "transactions-test";

pub fn test_forwarder_config() -> ForwarderConfig {
    let connection = ServiceBusConnection::parse(
        "Endpoint=sb://sogo-test.servicebus.windows.net/;SharedAccessKeyName=send;SharedAccessKey=dGVzdA==",
    )
    .expect("test connection string should parse");
    ForwarderConfig::new(connection, TEST_QUEUE)
}

pub fn test_state(transport: Arc<dyn QueueTransport>) -> AppState {
    build_state()
        .with_forwarder_config(test_forwarder_config())
        .with_transport(transport)
        .build()
        .expect("test state should build")
}

/// Production routes behind the production middleware stack.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

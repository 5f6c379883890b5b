use actix_web::{web, App, HttpServer};
use fee_forwarder::config::ServerConfig;
use fee_forwarder::infra::state::build_state;
use fee_forwarder::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use fee_forwarder::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = telemetry::init_tracing() {
        eprintln!("❌ Failed to install log subscriber: {e}");
        std::process::exit(1);
    }

    // Environment variables must be set by the runtime environment
    // (container env, function app settings, or a sourced .env file).
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().build() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        host = %server.host,
        port = server.port,
        queue = %app_state.forwarder.queue_name,
        namespace = %app_state.forwarder.connection.host,
        "Starting fee forwarder"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}

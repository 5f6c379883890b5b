use actix_web::web;

pub mod forward;
pub mod health;

/// Register every route. Middleware is applied by the caller (`main.rs`
/// or the test app builder).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(forward::configure_routes);
}

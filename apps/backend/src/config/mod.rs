pub mod forwarder;
pub mod server;

pub use forwarder::ForwarderConfig;
pub use server::ServerConfig;

use crate::error::AppError;

/// Look up a required variable, treating blank values as missing.
pub(crate) fn must_var<F>(lookup: &F, name: &str) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            AppError::config(format!("Required environment variable '{name}' is not set"))
        })
}

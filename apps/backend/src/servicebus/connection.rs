use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConnectionStringError {
    #[error("connection string is empty")]
    Empty,
    #[error("malformed connection string segment '{0}'")]
    MalformedSegment(String),
    #[error("connection string has no Endpoint")]
    MissingEndpoint,
    #[error("invalid Endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("connection string needs SharedAccessKeyName and SharedAccessKey, or SharedAccessSignature")]
    MissingCredential,
}

/// How requests to the namespace are authorized.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Named shared access key; a SAS token is minted per send.
    SharedKey { key_name: String, key: String },
    /// Pre-issued SAS token used verbatim.
    Signature(String),
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::SharedKey { key_name, .. } => f
                .debug_struct("SharedKey")
                .field("key_name", key_name)
                .field("key", &"[REDACTED]")
                .finish(),
            Credential::Signature(_) => f.debug_tuple("Signature").field(&"[REDACTED]").finish(),
        }
    }
}

/// Parsed `sbConnectionString`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceBusConnection {
    /// Fully qualified namespace host, e.g. `sogo.servicebus.windows.net`.
    pub host: String,
    pub credential: Credential,
}

impl ServiceBusConnection {
    /// Parses `Endpoint=sb://<host>/;SharedAccessKeyName=<name>;SharedAccessKey=<key>`.
    ///
    /// Keys are case-insensitive and unknown keys (`EntityPath`,
    /// `TransportType`, ...) are ignored. Values may themselves contain `=`.
    pub fn parse(raw: &str) -> Result<Self, ConnectionStringError> {
        if raw.trim().is_empty() {
            return Err(ConnectionStringError::Empty);
        }

        let mut endpoint = None;
        let mut key_name = None;
        let mut key = None;
        let mut signature = None;

        for segment in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (name, value) = segment
                .split_once('=')
                .ok_or_else(|| ConnectionStringError::MalformedSegment(segment.to_string()))?;
            let value = value.trim().to_string();
            match name.trim().to_ascii_lowercase().as_str() {
                "endpoint" => endpoint = Some(value),
                "sharedaccesskeyname" => key_name = Some(value),
                "sharedaccesskey" => key = Some(value),
                "sharedaccesssignature" => signature = Some(value),
                _ => {}
            }
        }

        let endpoint = endpoint.ok_or(ConnectionStringError::MissingEndpoint)?;
        let host = parse_host(&endpoint)?;

        let credential = match (key_name, key, signature) {
            (Some(key_name), Some(key), _) if !key_name.is_empty() && !key.is_empty() => {
                Credential::SharedKey { key_name, key }
            }
            (_, _, Some(sig)) if !sig.is_empty() => Credential::Signature(sig),
            _ => return Err(ConnectionStringError::MissingCredential),
        };

        Ok(Self { host, credential })
    }

    /// Base URL for REST calls against the namespace.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.host)
    }
}

fn parse_host(endpoint: &str) -> Result<String, ConnectionStringError> {
    let without_scheme = ["sb://", "https://", "amqps://"]
        .iter()
        .find_map(|scheme| {
            endpoint
                .get(..scheme.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
                .map(|_| &endpoint[scheme.len()..])
        })
        .ok_or_else(|| ConnectionStringError::InvalidEndpoint(endpoint.to_string()))?;

    let host = without_scheme.trim_end_matches('/');
    if host.is_empty() || host.contains('/') {
        return Err(ConnectionStringError::InvalidEndpoint(endpoint.to_string()));
    }
    Ok(host.to_ascii_lowercase())
}

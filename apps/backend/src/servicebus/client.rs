use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use time::OffsetDateTime;
use tracing::debug;

use super::connection::{Credential, ServiceBusConnection};
use super::sas::generate_sas_token;
use super::{QueueError, QueueMessage, QueueTransport, JSON_CONTENT_TYPE};

const BROKER_PROPERTIES: &str = "BrokerProperties";

/// Longest broker error body kept in a [`QueueError::Rejected`].
const MAX_ERROR_BODY: usize = 512;

/// Long-lived Service Bus client. One HTTP connection pool is shared by
/// every request; senders are cheap and created per send.
#[derive(Debug, Clone)]
pub struct ServiceBusClient {
    http: reqwest::Client,
    connection: ServiceBusConnection,
    sas_ttl: Duration,
}

impl ServiceBusClient {
    pub fn new(connection: ServiceBusConnection, sas_ttl: Duration) -> Result<Self, QueueError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("fee-forwarder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, connection, sas_ttl))
    }

    pub fn with_http_client(
        http: reqwest::Client,
        connection: ServiceBusConnection,
        sas_ttl: Duration,
    ) -> Self {
        Self {
            http,
            connection,
            sas_ttl,
        }
    }

    /// A sender bound to `queue`.
    pub fn sender(&self, queue: &str) -> ServiceBusSender<'_> {
        ServiceBusSender {
            client: self,
            queue: queue.to_string(),
        }
    }
}

#[async_trait]
impl QueueTransport for ServiceBusClient {
    async fn send(&self, queue: &str, message: &QueueMessage) -> Result<(), QueueError> {
        self.sender(queue).send(message).await
    }
}

pub struct ServiceBusSender<'a> {
    client: &'a ServiceBusClient,
    queue: String,
}

impl ServiceBusSender<'_> {
    pub fn queue(&self) -> &str {
        &self.queue
    }

    fn entity_url(&self) -> String {
        format!("{}/{}", self.client.connection.base_url(), self.queue)
    }

    fn authorization(&self, now: OffsetDateTime) -> Result<String, QueueError> {
        match &self.client.connection.credential {
            Credential::SharedKey { key_name, key } => {
                let expiry = i64::try_from(self.client.sas_ttl.as_secs())
                    .ok()
                    .and_then(|ttl| now.unix_timestamp().checked_add(ttl))
                    .ok_or_else(|| {
                        QueueError::InvalidRequest(format!(
                            "SAS token lifetime of {}s overflows the expiry",
                            self.client.sas_ttl.as_secs()
                        ))
                    })?;
                generate_sas_token(&self.entity_url(), key_name, key, expiry)
            }
            Credential::Signature(token) => Ok(token.clone()),
        }
    }

    /// Build the `POST <namespace>/<queue>/messages` request for `message`.
    pub fn build_request(
        &self,
        message: &QueueMessage,
        now: OffsetDateTime,
    ) -> Result<reqwest::Request, QueueError> {
        let request = self
            .client
            .http
            .post(format!("{}/messages", self.entity_url()))
            .header(AUTHORIZATION, self.authorization(now)?)
            .header(BROKER_PROPERTIES, message.broker_properties())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(message.body.clone())
            .build()?;
        Ok(request)
    }

    /// Send one message. Any non-2xx answer from the broker is an error;
    /// nothing is retried here.
    pub async fn send(&self, message: &QueueMessage) -> Result<(), QueueError> {
        let request = self.build_request(message, OffsetDateTime::now_utc())?;
        let response = self.client.http.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            debug!(queue = %self.queue, message_id = %message.message_id, status = status.as_u16(), "Message accepted by broker");
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            body.truncate(cut);
        }

        Err(QueueError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

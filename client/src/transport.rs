//! HTTP transport for GraphQL operations.
//!
//! The client sends one POST per operation and hands back whatever JSON the
//! endpoint answered with. It does not look at the payload: a response that
//! carries a GraphQL `errors` array is still a successful round trip.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout or body read failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The endpoint answered with something that is not JSON.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Port the interaction controller talks to.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, query: &str, variables: Option<Value>)
        -> Result<Value, TransportError>;
}

#[derive(Debug, Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

/// Reqwest-backed transport bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: Url,
}

impl GraphqlClient {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, TransportError> {
        Self::with_timeout(endpoint, None)
    }

    /// Same as [`GraphqlClient::new`] with an optional per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for GraphqlClient {
    async fn execute(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> Result<Value, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&GraphqlRequest { query, variables })
            .send()
            .await
            .map_err(|err| {
                log::warn!("graphql request to {} failed: {}", self.endpoint, err);
                err
            })?;

        let status = response.status();
        let body = response.bytes().await?;
        log::debug!(
            "graphql response from {}: {} ({} bytes)",
            self.endpoint,
            status,
            body.len()
        );
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Typed view of a GraphQL response body.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphqlResponse {
    Data(Value),
    Errors(Vec<Value>),
    Partial { data: Value, errors: Vec<Value> },
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

impl GraphqlResponse {
    /// Returns `None` when the payload is neither `data` nor `errors` shaped.
    pub fn decode(payload: &Value) -> Option<Self> {
        if !payload.is_object() {
            return None;
        }
        let envelope = Envelope::deserialize(payload).ok()?;
        let data = envelope.data.filter(|data| !data.is_null());
        let errors = envelope.errors.filter(|errors| !errors.is_empty());
        match (data, errors) {
            (Some(data), None) => Some(Self::Data(data)),
            (None, Some(errors)) => Some(Self::Errors(errors)),
            (Some(data), Some(errors)) => Some(Self::Partial { data, errors }),
            (None, None) => None,
        }
    }

    pub fn has_errors(&self) -> bool {
        !matches!(self, Self::Data(_))
    }
}

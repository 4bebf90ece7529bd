//! Reqwest based transport for ncp-core.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use ncp_core::{HttpSend, TransportError};
use reqwest::{Client, Request};
use std::time::Duration;

/// Default per-request timeout, matching the provider SDK convention.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// HttpSend implementation backed by a reqwest [`Client`].
///
/// The default client carries a 2000 ms timeout; an elapsed timeout is
/// reported as a no-response failure, which the execution core surfaces as
/// `No response from the server`.
#[derive(Debug)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl Default for ReqwestHttpSend {
    fn default() -> Self {
        // Building a client only fails on TLS backend misconfiguration.
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend from a configured reqwest [`Client`].
    ///
    /// The client's own timeout policy applies unchanged.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() || err.is_connect() {
        TransportError::no_response(err)
    } else if err.is_builder() || err.is_request() {
        TransportError::setup(err)
    } else {
        TransportError::other(err)
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError> {
        let req = Request::try_from(req).map_err(classify)?;
        let resp: http::Response<_> = self.client.execute(req).await.map_err(classify)?.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| TransportError::no_response(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

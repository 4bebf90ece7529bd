//! The HTTP transport seam of the execution core.

use bytes::Bytes;
use std::fmt::Debug;
use thiserror::Error as ThisError;

/// A transport failure, classified by how far the request got.
///
/// The distinction mirrors the three failure shapes an HTTP client can
/// report: a request that was dispatched but never answered, a request that
/// could not be dispatched at all, and everything else. The execution core
/// maps these onto [`crate::ErrorKind::NoResponse`],
/// [`crate::ErrorKind::RequestSetup`] and [`crate::ErrorKind::Unexpected`].
#[derive(ThisError, Debug)]
#[error("{kind}: {source}")]
pub struct TransportError {
    kind: TransportErrorKind,
    #[source]
    source: anyhow::Error,
}

/// How far a failed transport call got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request was sent but no response arrived (connect, timeout).
    NoResponse,
    /// The request could not be dispatched (builder/configuration fault).
    Setup,
    /// Any other transport failure.
    Other,
}

impl TransportError {
    /// Create a new transport error.
    pub fn new(kind: TransportErrorKind, source: impl Into<anyhow::Error>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    /// A request that went out and was never answered.
    pub fn no_response(source: impl Into<anyhow::Error>) -> Self {
        Self::new(TransportErrorKind::NoResponse, source)
    }

    /// A request that could not be dispatched.
    pub fn setup(source: impl Into<anyhow::Error>) -> Self {
        Self::new(TransportErrorKind::Setup, source)
    }

    /// Any other transport failure.
    pub fn other(source: impl Into<anyhow::Error>) -> Self {
        Self::new(TransportErrorKind::Other, source)
    }

    /// Get the classification of this failure.
    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::NoResponse => write!(f, "no response"),
            TransportErrorKind::Setup => write!(f, "setup failed"),
            TransportErrorKind::Other => write!(f, "transport failed"),
        }
    }
}

/// HttpSend executes one fully built request and returns the raw response.
///
/// This trait is the only suspension point of the pipeline. Implementations
/// own their timeout policy; an elapsed timeout must surface as
/// [`TransportErrorKind::NoResponse`]. This trait is designed for the
/// execution core, please don't use it as a general http client.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(
        &self,
        req: http::Request<Bytes>,
    ) -> std::result::Result<http::Response<Bytes>, TransportError>;
}

/// NoopHttpSend is a no-op implementation that always fails.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(
        &self,
        _req: http::Request<Bytes>,
    ) -> std::result::Result<http::Response<Bytes>, TransportError> {
        Err(TransportError::setup(anyhow::anyhow!(
            "HTTP sending not supported: no HTTP client configured"
        )))
    }
}

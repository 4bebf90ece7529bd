use crate::api::{ApiResponse, Operation};
use crate::http::TransportErrorKind;
use crate::request::ApiRequest;
use crate::{Context, Error, Result};
use log::debug;

/// ApiClient is the execution core shared by every service facade.
///
/// It owns no per-call state: each invocation takes a freshly built
/// [`ApiRequest`] plus the outcome of the caller's validation rules, makes
/// at most one transport call and classifies whatever comes back. Holding a
/// clone per service is cheap; all shared state (context, base URL) is
/// immutable after construction.
#[derive(Clone, Debug)]
pub struct ApiClient {
    ctx: Context,
    base_url: String,
}

impl ApiClient {
    /// Create a new client bound to a service base URL.
    pub fn new(ctx: Context, base_url: impl Into<String>) -> Self {
        Self {
            ctx,
            base_url: base_url.into(),
        }
    }

    /// The base URL this client resolves request paths against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the base URL, e.g. to target a stub server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Execute one operation.
    ///
    /// `precheck` carries the caller's validation outcome: when present it
    /// is returned as-is and **no transport call is made**. A request whose
    /// resolved URL fails the shape check is likewise rejected pre-flight.
    /// Otherwise exactly one transport call happens, its failure modes are
    /// classified into [`crate::ErrorKind`], and a success payload is
    /// decoded and normalized per the operation.
    pub async fn execute<O: Operation>(
        &self,
        req: ApiRequest,
        precheck: Option<Error>,
    ) -> Result<ApiResponse<O>> {
        if let Some(err) = precheck {
            debug!("{}: rejected before dispatch: {err}", O::NAME);
            return Err(err);
        }

        let http_req = req.into_http(&self.base_url)?;
        debug!("{}: {} {}", O::NAME, http_req.method(), http_req.uri());

        let resp = self
            .ctx
            .http_send(http_req)
            .await
            .map_err(|e| match e.kind() {
                TransportErrorKind::NoResponse => Error::no_response().with_source(e),
                TransportErrorKind::Setup => Error::request_setup().with_source(e),
                TransportErrorKind::Other => Error::unexpected(e.to_string()).with_source(e),
            })?;

        let status = resp.status();
        if !status.is_success() {
            debug!("{}: unexpected status {status}", O::NAME);
            return Err(Error::http_status(status.as_u16()));
        }

        let data = O::decode(resp.body())?;
        let normalized = O::normalize(&data)?;
        Ok(ApiResponse { data, normalized })
    }
}

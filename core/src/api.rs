use crate::{Error, Result};
use serde::de::DeserializeOwned;

/// Operation describes one API call: the raw payload the provider returns
/// and the normalized, provider-agnostic shape derived from it.
///
/// Service crates implement this on zero-sized marker types and pass them to
/// [`crate::ApiClient::execute`]. This replaces dispatching on a runtime
/// service tag: the compiler picks the decoder and the translator.
pub trait Operation {
    /// Operation name used in logs.
    const NAME: &'static str;

    /// The raw provider payload, as documented by the service.
    type Raw: DeserializeOwned;

    /// The normalized shape produced from the raw payload.
    type Normalized;

    /// Decode the response body into the raw payload.
    ///
    /// The default expects a JSON body. Operations answering `204 No
    /// Content` override this to accept an empty body.
    fn decode(body: &[u8]) -> Result<Self::Raw> {
        serde_json::from_slice(body).map_err(|e| {
            Error::malformed_response(format!(
                "{}: response payload does not match the documented shape",
                Self::NAME
            ))
            .with_source(e)
        })
    }

    /// Map the raw payload into the normalized shape.
    ///
    /// A payload that decoded but misses the parts the projection needs
    /// (e.g. an empty candidate list) must fail with
    /// [`crate::ErrorKind::MalformedResponse`], never panic.
    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized>;
}

/// The value returned by a successful operation.
///
/// Both the raw payload and the normalized shape are only ever present
/// together; failures are carried by [`crate::Error`] instead.
pub struct ApiResponse<O: Operation> {
    /// The raw provider payload.
    pub data: O::Raw,
    /// The normalized shape for this operation.
    pub normalized: O::Normalized,
}

impl<O: Operation> std::fmt::Debug for ApiResponse<O>
where
    O::Raw: std::fmt::Debug,
    O::Normalized: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiResponse")
            .field("data", &self.data)
            .field("normalized", &self.normalized)
            .finish()
    }
}

use crate::{Error, Result};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Uri};
use serde::Serialize;

/// Content type carried by every request in this workspace.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// A fully resolved request, ready for the transport.
///
/// Built fresh per call by the service crates and never reused: for
/// signature-bearing services the headers embed a timestamped signature
/// scoped to this exact method + path.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Path relative to the service base URL, including any query string.
    pub path: String,
    /// HTTP method, fixed per operation.
    pub method: Method,
    /// Resolved headers. `Content-Type` is always present.
    pub headers: HeaderMap,
    /// Serialized JSON body, when the operation carries one.
    pub body: Option<Bytes>,
}

impl ApiRequest {
    /// Create a request with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        Self {
            path: path.into(),
            method,
            headers,
            body: None,
        }
    }

    /// Create a GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request for the given path.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a DELETE request for the given path.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a header to the request.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        self.headers
            .insert(name.parse::<HeaderName>()?, value.parse::<HeaderValue>()?);
        Ok(self)
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: &impl Serialize) -> Result<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| Error::request_setup().with_source(e))?;
        self.body = Some(Bytes::from(bytes));
        Ok(self)
    }

    /// Resolve this request against a base URL into a transport request.
    ///
    /// The joined URL must parse as an absolute http(s) URI with a host;
    /// anything else is rejected as `Invalid URL` before any network call.
    pub(crate) fn into_http(self, base_url: &str) -> Result<Request<Bytes>> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let uri: Uri = url.parse().map_err(|_| Error::invalid_url())?;
        match uri.scheme_str() {
            Some("http") | Some("https") => {}
            _ => return Err(Error::invalid_url()),
        }
        if uri.host().is_none() {
            return Err(Error::invalid_url());
        }

        let mut builder = Request::builder().method(self.method).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);
        }
        builder
            .body(self.body.unwrap_or_default())
            .map_err(|e| Error::request_setup().with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_into_http_joins_base_and_path() {
        let req = ApiRequest::get("/langs/v1/dect")
            .into_http("https://naveropenapi.apigw.ntruss.com")
            .unwrap();
        assert_eq!(
            req.uri().to_string(),
            "https://naveropenapi.apigw.ntruss.com/langs/v1/dect"
        );
        assert_eq!(
            req.headers().get(CONTENT_TYPE).unwrap(),
            CONTENT_TYPE_JSON
        );
    }

    #[test]
    fn test_into_http_rejects_bad_urls() {
        for base in ["", "not a url", "ftp://example.com", "https://"] {
            let err = ApiRequest::get("/x").into_http(base).unwrap_err();
            assert_eq!(err.to_string(), "Invalid URL", "base: {base}");
        }
    }

    #[test]
    fn test_json_body_is_serialized() {
        let req = ApiRequest::post("/nmt/v1/translation")
            .json(&serde_json::json!({ "source": "ko" }))
            .unwrap();
        assert_eq!(req.body.as_deref(), Some(br#"{"source":"ko"}"#.as_slice()));
    }
}

use crate::auth::OpenApiAuth;
use crate::constants::{HEADER_CLIENT_ID, HEADER_CLIENT_SECRET};
use crate::types::{DetectLanguageBody, TranslationBody};
use http::Method;
use ncp_core::{ApiRequest, Result};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Builds keyed requests for every Papago operation.
///
/// Papago requests carry the application key pair as two static headers;
/// there is no per-request signature.
#[derive(Debug, Clone)]
pub struct PapagoRequestFactory {
    auth: OpenApiAuth,
}

impl PapagoRequestFactory {
    /// Create a factory bound to an application key pair.
    pub fn new(auth: OpenApiAuth) -> Self {
        Self { auth }
    }

    fn keyed(&self, method: Method, path: String) -> Result<ApiRequest> {
        ApiRequest::new(method, path)
            .header(HEADER_CLIENT_ID, &self.auth.client_id)?
            .header(HEADER_CLIENT_SECRET, &self.auth.client_secret)
    }

    /// `POST /nmt/v1/translation`.
    pub fn translation(&self, source: &str, target: &str, text: &str) -> Result<ApiRequest> {
        let body = TranslationBody {
            source,
            target,
            text,
        };
        self.keyed(Method::POST, "/nmt/v1/translation".to_string())?
            .json(&body)
    }

    /// `POST /langs/v1/dect`.
    pub fn detect_language(&self, text: &str) -> Result<ApiRequest> {
        let body = DetectLanguageBody { query: text };
        self.keyed(Method::POST, "/langs/v1/dect".to_string())?
            .json(&body)
    }

    /// `GET /krdict/v1/romanization?query={urlEncodedName}`.
    pub fn romanization(&self, name: &str) -> Result<ApiRequest> {
        let query = utf8_percent_encode(name, NON_ALPHANUMERIC);
        self.keyed(
            Method::GET,
            format!("/krdict/v1/romanization?query={query}"),
        )
    }
}

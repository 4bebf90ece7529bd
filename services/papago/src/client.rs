use crate::auth::OpenApiAuth;
use crate::constants::PAPAGO_BASE_URL;
use crate::ops::{DetectLanguage, RomanizeName, Translate};
use crate::request::PapagoRequestFactory;
use crate::validate;
use ncp_core::{ApiClient, ApiResponse, Context, Result};

/// Facade over the Papago operations.
///
/// Each method validates its parameters first; a failed rule is handed to
/// the execution core as a precheck, so the call is rejected with the rule's
/// message and no request goes out.
#[derive(Debug, Clone)]
pub struct PapagoClient {
    client: ApiClient,
    factory: PapagoRequestFactory,
}

impl PapagoClient {
    /// Create a client against the production Open API endpoint.
    pub fn new(ctx: Context, auth: OpenApiAuth) -> Self {
        Self {
            client: ApiClient::new(ctx, PAPAGO_BASE_URL),
            factory: PapagoRequestFactory::new(auth),
        }
    }

    /// Point the client at a different base URL.
    ///
    /// Mainly useful against a stub server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    /// Translate `text` from `source` to `target` (wire codes, e.g. `ko`).
    pub async fn translation(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<ApiResponse<Translate>> {
        let req = self.factory.translation(source, target, text)?;
        let precheck = validate::translation(source, target, text);
        self.client.execute::<Translate>(req, precheck).await
    }

    /// Detect the language of `text`.
    pub async fn detect_language(&self, text: &str) -> Result<ApiResponse<DetectLanguage>> {
        let req = self.factory.detect_language(text)?;
        let precheck = validate::detect_language(text);
        self.client.execute::<DetectLanguage>(req, precheck).await
    }

    /// Romanize a Korean full name, e.g. `허재` into `Heo Jae`.
    pub async fn korean_name_romanizer(&self, name: &str) -> Result<ApiResponse<RomanizeName>> {
        let req = self.factory.romanization(name)?;
        let precheck = validate::korean_name(name);
        self.client.execute::<RomanizeName>(req, precheck).await
    }
}

use crate::constants::{NCP_OPENAPI_CLIENT_ID, NCP_OPENAPI_CLIENT_SECRET};
use ncp_core::utils::Redact;
use ncp_core::Context;
use std::fmt::{Debug, Formatter};

/// Application key pair issued for the NAVER Open API gateway.
///
/// Unlike the SENS services, Papago calls are not signed per request; these
/// two values ride along as static headers on every call.
#[derive(Default, Clone)]
pub struct OpenApiAuth {
    /// Application client id.
    pub client_id: String,
    /// Application client secret.
    pub client_secret: String,
}

impl OpenApiAuth {
    /// Create a new key pair.
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
        }
    }

    /// Load the key pair from `NCP_OPENAPI_CLIENT_ID` /
    /// `NCP_OPENAPI_CLIENT_SECRET`.
    ///
    /// Returns `None` unless both variables are present.
    pub fn from_env(ctx: &Context) -> Option<Self> {
        let client_id = ctx.env_var(NCP_OPENAPI_CLIENT_ID)?;
        let client_secret = ctx.env_var(NCP_OPENAPI_CLIENT_SECRET)?;
        Some(Self {
            client_id,
            client_secret,
        })
    }

    /// Check whether both halves of the key pair are present.
    pub fn is_valid(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl Debug for OpenApiAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenApiAuth")
            .field("client_id", &self.client_id)
            .field("client_secret", &Redact::from(&self.client_secret))
            .finish()
    }
}

// Endpoint and header names fixed by the NAVER Open API gateway.
pub const PAPAGO_BASE_URL: &str = "https://naveropenapi.apigw.ntruss.com";

pub(crate) const HEADER_CLIENT_ID: &str = "X-NCP-APIGW-API-KEY-ID";
pub(crate) const HEADER_CLIENT_SECRET: &str = "X-NCP-APIGW-API-KEY";

/// Longest text the translation endpoint accepts, in characters.
pub const MAX_TRANSLATION_TEXT_LEN: usize = 5000;

// Env values used by the open-api auth loader.
pub const NCP_OPENAPI_CLIENT_ID: &str = "NCP_OPENAPI_CLIENT_ID";
pub const NCP_OPENAPI_CLIENT_SECRET: &str = "NCP_OPENAPI_CLIENT_SECRET";

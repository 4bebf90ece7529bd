//! Papago client for the NAVER Open API gateway.
//!
//! Papago is NAVER's machine-translation family; this crate covers text
//! translation between thirteen languages, language detection, and Korean
//! name romanization. Calls authenticate with an application key pair sent
//! as headers; inputs are validated client-side and a failed rule rejects
//! the call before any request goes out.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ncp_core::Context;
//! use ncp_http_send_reqwest::ReqwestHttpSend;
//! use ncp_papago::{OpenApiAuth, PapagoClient};
//!
//! #[tokio::main]
//! async fn main() -> ncp_core::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!     let client = PapagoClient::new(ctx, OpenApiAuth::new("client-id", "client-secret"));
//!
//!     let resp = client.translation("ko", "en", "안녕하세요").await?;
//!     println!("{}", resp.normalized.translated);
//!     Ok(())
//! }
//! ```
//!
//! Not every language pair has a translator; [`Language::supported_targets`]
//! lists the reachable targets per source.

mod constants;
pub use constants::{
    MAX_TRANSLATION_TEXT_LEN, NCP_OPENAPI_CLIENT_ID, NCP_OPENAPI_CLIENT_SECRET, PAPAGO_BASE_URL,
};

mod auth;
pub use auth::OpenApiAuth;

mod language;
pub use language::Language;

mod types;
pub use types::*;

mod request;
pub use request::PapagoRequestFactory;

mod validate;

mod ops;
pub use ops::{DetectLanguage, RomanizeName, Translate};

mod client;
pub use client::PapagoClient;

//! SENS SMS client for Naver Cloud Platform.
//!
//! SENS is NCP's notification service; this crate covers its SMS API:
//! sending common/advertising messages (SMS and LMS), reserving messages
//! for later dispatch, and looking up delivery state. Every request is
//! signed with the NCP API gateway signature (`ncp_core::sign`), scoped to
//! that request's exact method and path.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ncp_core::{Context, Credential};
//! use ncp_http_send_reqwest::ReqwestHttpSend;
//! use ncp_sens_sms::{ContentType, SmsClient, SmsServiceAuth};
//!
//! #[tokio::main]
//! async fn main() -> ncp_core::Result<()> {
//!     let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//!     let client = SmsClient::new(
//!         ctx,
//!         Credential::new("access-key-id", "secret-key"),
//!         SmsServiceAuth::new("01012345678", "ncp:sms:kr:1234567890:my-service"),
//!     );
//!
//!     let resp = client
//!         .send_sms(&["01043219876"], "hello from sens", ContentType::Comm)
//!         .await?;
//!     println!("request id: {}", resp.normalized.request_id);
//!     Ok(())
//! }
//! ```
//!
//! Validation of message parameters is left to the server; a malformed send
//! surfaces as `Unexpected HTTP Status Code : 400`.

mod constants;
pub use constants::{NCP_SMS_SENDER_PHONE, NCP_SMS_SERVICE_ID, SENS_BASE_URL};

mod auth;
pub use auth::SmsServiceAuth;

mod types;
pub use types::*;

mod request;
pub use request::SmsRequestFactory;

mod ops;
pub use ops::{
    CancelReservedMessage, LookupMessageRequest, LookupMessageResult, LookupReservedMessage,
    SendMessage,
};

mod client;
pub use client::SmsClient;

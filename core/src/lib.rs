//! Core components for calling Naver Cloud Platform APIs.
//!
//! This crate provides the shared request/response pipeline used by the
//! service crates in this workspace. Every operation goes through the same
//! stages:
//!
//! - **Validation**: service crates run their per-operation rules before any
//!   network activity and hand the outcome to the execution core.
//! - **Request building**: a fully resolved [`ApiRequest`] (path, method,
//!   headers, body), signed with the NCP API gateway signature where the
//!   target service requires it (see [`sign`]).
//! - **Execution**: [`ApiClient::execute`] performs exactly one transport
//!   call through the [`HttpSend`] seam and classifies every failure into
//!   [`ErrorKind`].
//! - **Normalization**: the [`Operation`] trait maps the raw provider
//!   payload into a stable, provider-agnostic shape.
//!
//! ## Example
//!
//! ```no_run
//! use ncp_core::{ApiClient, ApiRequest, Context, Operation, Result};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Raw {
//!     #[serde(rename = "langCode")]
//!     lang_code: String,
//! }
//!
//! struct Detect;
//!
//! impl Operation for Detect {
//!     const NAME: &'static str = "detect";
//!     type Raw = Raw;
//!     type Normalized = String;
//!
//!     fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
//!         Ok(raw.lang_code.clone())
//!     }
//! }
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let client = ApiClient::new(ctx, "https://naveropenapi.apigw.ntruss.com");
//! let req = ApiRequest::post("/langs/v1/dect").json(&serde_json::json!({ "query": "text" }))?;
//! let resp = client.execute::<Detect>(req, None).await?;
//! println!("detected: {}", resp.normalized);
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod http;
pub use http::{HttpSend, NoopHttpSend, TransportError, TransportErrorKind};
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod sign;
pub use sign::{sign, sign_at, Credential, Signature, NCP_ACCESS_KEY_ID, NCP_SECRET_KEY};

mod request;
pub use request::ApiRequest;

mod api;
pub use api::{ApiResponse, Operation};

mod client;
pub use client::ApiClient;

use ncp_core::{Context, OsEnv};
use ncp_http_send_reqwest::ReqwestHttpSend;

/// A context wired for production use: a `reqwest` transport with the
/// default timeout and the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

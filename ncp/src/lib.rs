#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use ncp_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "papago")]
pub mod papago {
    pub use ncp_papago::*;
}

#[cfg(feature = "sens")]
pub mod sens {
    pub use ncp_sens_sms::*;
}

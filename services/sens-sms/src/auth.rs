use crate::constants::{NCP_SMS_SENDER_PHONE, NCP_SMS_SERVICE_ID};
use ncp_core::utils::Redact;
use ncp_core::Context;
use std::fmt::{Debug, Formatter};

/// Service identity scoping which SMS channel a client uses.
///
/// Immutable per client instance: the registered caller id and the SENS
/// service id issued when the SMS service was created in the console.
#[derive(Default, Clone)]
pub struct SmsServiceAuth {
    /// Registered caller id (phone number) messages are sent from.
    pub sender_phone: String,
    /// SENS service id, e.g. `ncp:sms:kr:1234567890:my-service`.
    pub service_id: String,
}

impl SmsServiceAuth {
    /// Create a new service identity.
    pub fn new(sender_phone: &str, service_id: &str) -> Self {
        Self {
            sender_phone: sender_phone.to_string(),
            service_id: service_id.to_string(),
        }
    }

    /// Load the identity from `NCP_SMS_SENDER_PHONE` / `NCP_SMS_SERVICE_ID`.
    ///
    /// Returns `None` unless both variables are present.
    pub fn from_env(ctx: &Context) -> Option<Self> {
        let sender_phone = ctx.env_var(NCP_SMS_SENDER_PHONE)?;
        let service_id = ctx.env_var(NCP_SMS_SERVICE_ID)?;
        Some(Self {
            sender_phone,
            service_id,
        })
    }

    /// Check whether both identifiers are present.
    pub fn is_valid(&self) -> bool {
        !self.sender_phone.is_empty() && !self.service_id.is_empty()
    }
}

impl Debug for SmsServiceAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsServiceAuth")
            .field("sender_phone", &Redact::from(&self.sender_phone))
            .field("service_id", &self.service_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncp_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (NCP_SMS_SENDER_PHONE.to_string(), "01012345678".to_string()),
                (NCP_SMS_SERVICE_ID.to_string(), "service-id".to_string()),
            ]),
        });

        let auth = SmsServiceAuth::from_env(&ctx).unwrap();
        assert_eq!(auth.sender_phone, "01012345678");
        assert_eq!(auth.service_id, "service-id");
        assert!(auth.is_valid());
    }

    #[test]
    fn test_from_env_requires_both() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(
                NCP_SMS_SENDER_PHONE.to_string(),
                "01012345678".to_string(),
            )]),
        });

        assert!(SmsServiceAuth::from_env(&ctx).is_none());
    }

    #[test]
    fn test_debug_redacts_phone() {
        let auth = SmsServiceAuth::new("010-1994-1227", "service-id");
        let out = format!("{auth:?}");
        assert!(!out.contains("010-1994-1227"));
        assert!(out.contains("service-id"));
    }
}

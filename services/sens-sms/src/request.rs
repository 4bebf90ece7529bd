use crate::auth::SmsServiceAuth;
use crate::constants::{
    DEFAULT_COUNTRY_CODE, HEADER_ACCESS_KEY, HEADER_SIGNATURE, HEADER_TIMESTAMP,
};
use crate::types::{ContentType, MessageType, Recipient, SendMessageBody};
use http::Method;
use ncp_core::{sign, ApiRequest, Credential, Result};

/// Builds signed requests for every SMS operation.
///
/// Each build resolves the operation's path against the service id, fixes
/// the method, and attaches the NCP signature triplet computed freshly for
/// that exact method + path pair.
#[derive(Debug, Clone)]
pub struct SmsRequestFactory {
    credential: Credential,
    auth: SmsServiceAuth,
}

impl SmsRequestFactory {
    /// Create a factory bound to an account credential and service identity.
    pub fn new(credential: Credential, auth: SmsServiceAuth) -> Self {
        Self { credential, auth }
    }

    /// The service identity requests are scoped to.
    pub fn auth(&self) -> &SmsServiceAuth {
        &self.auth
    }

    fn signed(&self, method: Method, path: String) -> Result<ApiRequest> {
        let signature = sign(&method, &path, &self.credential);
        ApiRequest::new(method, path)
            .header(HEADER_ACCESS_KEY, &self.credential.access_key_id)?
            .header(HEADER_TIMESTAMP, &signature.timestamp)?
            .header(HEADER_SIGNATURE, &signature.signature)
    }

    /// `POST /sms/v2/services/{serviceId}/messages`, optionally reserved.
    pub fn send_message(
        &self,
        message_type: MessageType,
        content_type: ContentType,
        to: &[&str],
        content: &str,
        subject: Option<&str>,
        reserve_time: Option<&str>,
    ) -> Result<ApiRequest> {
        let path = format!("/sms/v2/services/{}/messages", self.auth.service_id);
        let body = SendMessageBody {
            message_type,
            content_type,
            country_code: DEFAULT_COUNTRY_CODE,
            from: &self.auth.sender_phone,
            subject,
            content,
            messages: to.iter().copied().map(|to| Recipient { to }).collect(),
            reserve_time,
        };
        self.signed(Method::POST, path)?.json(&body)
    }

    /// `GET /sms/v2/services/{serviceId}/messages?requestId={id}`.
    pub fn lookup_message_request(&self, request_id: &str) -> Result<ApiRequest> {
        let path = format!(
            "/sms/v2/services/{}/messages?requestId={}",
            self.auth.service_id, request_id
        );
        self.signed(Method::GET, path)
    }

    /// `GET /sms/v2/services/{serviceId}/messages/{messageId}`.
    pub fn lookup_message_result(&self, message_id: &str) -> Result<ApiRequest> {
        let path = format!(
            "/sms/v2/services/{}/messages/{}",
            self.auth.service_id, message_id
        );
        self.signed(Method::GET, path)
    }

    /// `GET /sms/v2/services/{serviceId}/reservations/{reserveId}/reserve-status`.
    pub fn lookup_reserved_message(&self, reserve_id: &str) -> Result<ApiRequest> {
        let path = format!(
            "/sms/v2/services/{}/reservations/{}/reserve-status",
            self.auth.service_id, reserve_id
        );
        self.signed(Method::GET, path)
    }

    /// `DELETE /sms/v2/services/{serviceId}/reservations/{reserveId}`.
    pub fn cancel_reserved_message(&self, reserve_id: &str) -> Result<ApiRequest> {
        let path = format!(
            "/sms/v2/services/{}/reservations/{}",
            self.auth.service_id, reserve_id
        );
        self.signed(Method::DELETE, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn factory() -> SmsRequestFactory {
        SmsRequestFactory::new(
            Credential::new("accessKey", "secretKey"),
            SmsServiceAuth::new("01012345678", "svc-id"),
        )
    }

    #[test]
    fn test_send_message_carries_signature_triplet() {
        let req = factory()
            .send_message(
                MessageType::Sms,
                ContentType::Comm,
                &["01043219876"],
                "hello",
                None,
                None,
            )
            .unwrap();

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/sms/v2/services/svc-id/messages");
        assert_eq!(req.headers.get(HEADER_ACCESS_KEY).unwrap(), "accessKey");
        assert!(req.headers.contains_key(HEADER_TIMESTAMP));
        assert!(req.headers.contains_key(HEADER_SIGNATURE));
        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );

        let body: serde_json::Value = serde_json::from_slice(req.body.as_ref().unwrap()).unwrap();
        assert_eq!(body["from"], "01012345678");
        assert_eq!(body["messages"][0]["to"], "01043219876");
    }

    #[test]
    fn test_lookup_paths_embed_identifiers() {
        let f = factory();
        assert_eq!(
            f.lookup_message_request("req-1").unwrap().path,
            "/sms/v2/services/svc-id/messages?requestId=req-1"
        );
        assert_eq!(
            f.lookup_message_result("msg-1").unwrap().path,
            "/sms/v2/services/svc-id/messages/msg-1"
        );
        assert_eq!(
            f.lookup_reserved_message("res-1").unwrap().path,
            "/sms/v2/services/svc-id/reservations/res-1/reserve-status"
        );
        let cancel = f.cancel_reserved_message("res-1").unwrap();
        assert_eq!(cancel.method, Method::DELETE);
        assert_eq!(cancel.path, "/sms/v2/services/svc-id/reservations/res-1");
    }

    #[test]
    fn test_signature_is_scoped_to_method_and_path() {
        let f = factory();
        let a = f.lookup_message_request("req-1").unwrap();
        let b = f.lookup_message_result("msg-1").unwrap();
        assert_ne!(
            a.headers.get(HEADER_SIGNATURE).unwrap(),
            b.headers.get(HEADER_SIGNATURE).unwrap()
        );
    }
}

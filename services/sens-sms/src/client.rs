use crate::auth::SmsServiceAuth;
use crate::constants::SENS_BASE_URL;
use crate::ops::{
    CancelReservedMessage, LookupMessageRequest, LookupMessageResult, LookupReservedMessage,
    SendMessage,
};
use crate::request::SmsRequestFactory;
use crate::types::ContentType;
use crate::types::MessageType;
use ncp_core::{ApiClient, ApiResponse, Context, Credential, Result};

/// Facade over the SENS SMS operations.
///
/// Thin composition of the request factory and the shared execution core;
/// every method performs at most one network call and keeps no state across
/// calls, so one client can be shared across tasks freely.
#[derive(Debug, Clone)]
pub struct SmsClient {
    client: ApiClient,
    factory: SmsRequestFactory,
}

impl SmsClient {
    /// Create a client against the production SENS endpoint.
    pub fn new(ctx: Context, credential: Credential, auth: SmsServiceAuth) -> Self {
        Self {
            client: ApiClient::new(ctx, SENS_BASE_URL),
            factory: SmsRequestFactory::new(credential, auth),
        }
    }

    /// Point the client at a different base URL.
    ///
    /// Mainly useful against a stub server in tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(base_url);
        self
    }

    /// Send a short message to one or more recipients.
    pub async fn send_sms(
        &self,
        to: &[&str],
        content: &str,
        content_type: ContentType,
    ) -> Result<ApiResponse<SendMessage>> {
        let req = self
            .factory
            .send_message(MessageType::Sms, content_type, to, content, None, None);
        self.client.execute::<SendMessage>(req?, None).await
    }

    /// Send a long message with a subject to one or more recipients.
    pub async fn send_lms(
        &self,
        to: &[&str],
        subject: &str,
        content: &str,
        content_type: ContentType,
    ) -> Result<ApiResponse<SendMessage>> {
        let req = self.factory.send_message(
            MessageType::Lms,
            content_type,
            to,
            content,
            Some(subject),
            None,
        );
        self.client.execute::<SendMessage>(req?, None).await
    }

    /// Reserve a short message for dispatch at `reserve_time`
    /// (`yyyy-MM-dd HH:mm`, KST).
    pub async fn reserve_sms(
        &self,
        to: &[&str],
        content: &str,
        reserve_time: &str,
        content_type: ContentType,
    ) -> Result<ApiResponse<SendMessage>> {
        let req = self.factory.send_message(
            MessageType::Sms,
            content_type,
            to,
            content,
            None,
            Some(reserve_time),
        );
        self.client.execute::<SendMessage>(req?, None).await
    }

    /// Reserve a long message with a subject for dispatch at `reserve_time`
    /// (`yyyy-MM-dd HH:mm`, KST).
    pub async fn reserve_lms(
        &self,
        to: &[&str],
        subject: &str,
        content: &str,
        reserve_time: &str,
        content_type: ContentType,
    ) -> Result<ApiResponse<SendMessage>> {
        let req = self.factory.send_message(
            MessageType::Lms,
            content_type,
            to,
            content,
            Some(subject),
            Some(reserve_time),
        );
        self.client.execute::<SendMessage>(req?, None).await
    }

    /// Look up every message dispatched under a request id.
    pub async fn lookup_message_request(
        &self,
        request_id: &str,
    ) -> Result<ApiResponse<LookupMessageRequest>> {
        let req = self.factory.lookup_message_request(request_id);
        self.client
            .execute::<LookupMessageRequest>(req?, None)
            .await
    }

    /// Look up the delivery results of a single message.
    pub async fn lookup_message_result(
        &self,
        message_id: &str,
    ) -> Result<ApiResponse<LookupMessageResult>> {
        let req = self.factory.lookup_message_result(message_id);
        self.client.execute::<LookupMessageResult>(req?, None).await
    }

    /// Look up the status of a reserved message.
    pub async fn lookup_reserved_message(
        &self,
        reserve_id: &str,
    ) -> Result<ApiResponse<LookupReservedMessage>> {
        let req = self.factory.lookup_reserved_message(reserve_id);
        self.client
            .execute::<LookupReservedMessage>(req?, None)
            .await
    }

    /// Cancel a reserved message before it fires.
    pub async fn cancel_reserved_message(
        &self,
        reserve_id: &str,
    ) -> Result<ApiResponse<CancelReservedMessage>> {
        let req = self.factory.cancel_reserved_message(reserve_id);
        self.client
            .execute::<CancelReservedMessage>(req?, None)
            .await
    }
}

//! Request and response shapes of the SENS SMS API.

use serde::{Deserialize, Serialize};

/// Kind of message being sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MessageType {
    /// Short message, up to 90 bytes of content.
    #[serde(rename = "SMS")]
    Sms,
    /// Long message with a subject, up to 2000 bytes of content.
    #[serde(rename = "LMS")]
    Lms,
}

/// Classification the carrier applies to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContentType {
    /// Common message.
    #[serde(rename = "COMM")]
    Comm,
    /// Advertising message (carrier rules for opt-out footers apply).
    #[serde(rename = "AD")]
    Ad,
}

/// One recipient entry of a send request body.
#[derive(Debug, Serialize)]
pub(crate) struct Recipient<'a> {
    pub to: &'a str,
}

/// Body of `POST /sms/v2/services/{serviceId}/messages`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendMessageBody<'a> {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub content_type: ContentType,
    pub country_code: &'a str,
    pub from: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'a str>,
    pub content: &'a str,
    pub messages: Vec<Recipient<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time: Option<&'a str>,
}

/// Raw response of a send (or reserve) call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// Unique request id covering every recipient of this call.
    pub request_id: String,
    /// Datetime the request was accepted.
    pub request_time: String,
    /// Api status code, http based (`202` on acceptance).
    pub status_code: String,
    /// `success` or `fail`.
    pub status_name: String,
}

/// Raw response of a lookup by request id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupMessageResponse {
    /// The request id that was looked up.
    pub request_id: String,
    /// Api status code, http based.
    pub status_code: String,
    /// `success`, `reserved`, `scheduled` or `fail`.
    pub status_name: String,
    /// Individual messages dispatched under this request id.
    pub messages: Vec<MessageRequestData>,
}

/// One message entry of a lookup-by-request response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequestData {
    /// Unique message id.
    pub message_id: String,
    /// Datetime the message was requested.
    pub request_time: String,
    /// `COMM` or `AD`.
    pub content_type: String,
    /// Recipient country code.
    pub country_code: String,
    /// Sender phone number.
    pub from: String,
    /// Recipient phone number.
    pub to: String,
}

/// Raw response of a lookup by message id.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResultResponse {
    /// Api status code, http based.
    pub status_code: String,
    /// `success` or `fail`.
    pub status_name: String,
    /// Delivery results for the message.
    pub messages: Vec<MessageResultData>,
}

/// One delivery result entry of a lookup-by-message response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResultData {
    /// Datetime the message was requested.
    pub request_time: String,
    /// `COMM` or `AD`.
    pub content_type: String,
    /// Message content as sent.
    pub content: String,
    /// Recipient country code.
    pub country_code: String,
    /// Sender phone number.
    pub from: String,
    /// Recipient phone number.
    pub to: String,
    /// Processing status of the message.
    pub status: String,
    /// Per-recipient status code.
    pub status_code: String,
    /// Status name matching the status code.
    pub status_name: String,
    /// Datetime the delivery completed.
    pub complete_time: String,
    /// Carrier code that handled the delivery.
    pub telco_code: String,
}

/// Raw response of a reserved-message status lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupReservedMessageResponse {
    /// Unique id of the reserved message.
    pub reserve_id: String,
    /// Timezone the reservation is scheduled in.
    pub reserve_time_zone: String,
    /// Time the reservation fires at.
    pub reserve_time: String,
    /// `READY`, `PROCESSING`, `CANCELED`, `FAIL`, `DONE` or `STALE`.
    pub reserve_status: String,
}

/// Empty payload for operations answering `204 No Content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmptyResponse {}

/// Normalized result of a send: the accepted status code and the request id
/// to look the dispatch up with later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// Api status code of the acceptance.
    pub result: String,
    /// Request id covering this send.
    pub request_id: String,
}

/// Normalized result of a lookup by request id: the projected message ids,
/// provider order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLookup {
    /// Status name of the request.
    pub result: String,
    /// The request id that was looked up.
    pub request_id: String,
    /// Message ids under this request, in provider order.
    pub message_ids: Vec<String>,
}

/// Normalized result of a lookup by message id: the delivery entries passed
/// through untouched.
#[derive(Debug, Clone)]
pub struct ResultLookup {
    /// Status name of the lookup.
    pub result: String,
    /// Delivery results, in provider order.
    pub messages: Vec<MessageResultData>,
}

/// Normalized reservation status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStatus {
    /// `READY`, `PROCESSING`, `CANCELED`, `FAIL`, `DONE` or `STALE`.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_send_body_shape() {
        let body = SendMessageBody {
            message_type: MessageType::Sms,
            content_type: ContentType::Comm,
            country_code: "82",
            from: "01012345678",
            subject: None,
            content: "hello",
            messages: vec![Recipient { to: "01043219876" }],
            reserve_time: None,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "SMS",
                "contentType": "COMM",
                "countryCode": "82",
                "from": "01012345678",
                "content": "hello",
                "messages": [ { "to": "01043219876" } ],
            })
        );
    }

    #[test]
    fn test_lms_reserve_body_carries_subject_and_time() {
        let body = SendMessageBody {
            message_type: MessageType::Lms,
            content_type: ContentType::Ad,
            country_code: "82",
            from: "01012345678",
            subject: Some("notice"),
            content: "hello",
            messages: vec![Recipient { to: "01043219876" }],
            reserve_time: Some("2021-04-19 07:00"),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "LMS");
        assert_eq!(json["contentType"], "AD");
        assert_eq!(json["subject"], "notice");
        assert_eq!(json["reserveTime"], "2021-04-19 07:00");
    }
}

//! Operation markers tying each SMS call to its raw payload and its
//! normalized shape.

use crate::types::{
    EmptyResponse, LookupMessageResponse, LookupReservedMessageResponse, LookupResultResponse,
    RequestLookup, ReserveStatus, ResultLookup, SendMessageResponse, SendReceipt,
};
use ncp_core::{Operation, Result};

/// Send (or reserve) a message batch.
#[derive(Debug)]
pub struct SendMessage;

impl Operation for SendMessage {
    const NAME: &'static str = "sens.send_message";
    type Raw = SendMessageResponse;
    type Normalized = SendReceipt;

    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        Ok(SendReceipt {
            result: raw.status_code.clone(),
            request_id: raw.request_id.clone(),
        })
    }
}

/// Look up a dispatch by request id.
#[derive(Debug)]
pub struct LookupMessageRequest;

impl Operation for LookupMessageRequest {
    const NAME: &'static str = "sens.lookup_message_request";
    type Raw = LookupMessageResponse;
    type Normalized = RequestLookup;

    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        Ok(RequestLookup {
            result: raw.status_name.clone(),
            request_id: raw.request_id.clone(),
            message_ids: raw.messages.iter().map(|m| m.message_id.clone()).collect(),
        })
    }
}

/// Look up delivery results by message id.
#[derive(Debug)]
pub struct LookupMessageResult;

impl Operation for LookupMessageResult {
    const NAME: &'static str = "sens.lookup_message_result";
    type Raw = LookupResultResponse;
    type Normalized = ResultLookup;

    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        Ok(ResultLookup {
            result: raw.status_name.clone(),
            messages: raw.messages.clone(),
        })
    }
}

/// Look up the status of a reserved message.
#[derive(Debug)]
pub struct LookupReservedMessage;

impl Operation for LookupReservedMessage {
    const NAME: &'static str = "sens.lookup_reserved_message";
    type Raw = LookupReservedMessageResponse;
    type Normalized = ReserveStatus;

    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        Ok(ReserveStatus {
            status: raw.reserve_status.clone(),
        })
    }
}

/// Cancel a reserved message.
#[derive(Debug)]
pub struct CancelReservedMessage;

impl Operation for CancelReservedMessage {
    const NAME: &'static str = "sens.cancel_reserved_message";
    type Raw = EmptyResponse;
    type Normalized = ();

    // The API answers 204 No Content; there is no payload to parse.
    fn decode(_body: &[u8]) -> Result<Self::Raw> {
        Ok(EmptyResponse {})
    }

    fn normalize(_raw: &Self::Raw) -> Result<Self::Normalized> {
        Ok(())
    }
}

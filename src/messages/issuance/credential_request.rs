use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::error::prelude::*;
use crate::messages::a2a::MessageId;
use crate::messages::attachment::{AttachmentId, Attachments};
use crate::messages::thread::Thread;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CredentialRequest {
    #[serde(rename = "@id")]
    pub id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "requests~attach")]
    pub requests_attach: Attachments,
    #[serde(rename = "~thread")]
    pub thread: Thread,
}

impl CredentialRequest {
    pub fn create() -> Self {
        CredentialRequest::default()
    }

    pub fn set_thread_id(mut self, id: &str) -> Self {
        self.thread.thid = Some(id.to_string());
        self
    }

    pub fn set_requests_attach(mut self, credential_request: String) -> VcxResult<CredentialRequest> {
        self.requests_attach.add_base64_encoded_json_attachment(
            AttachmentId::CredentialRequest,
            Value::String(credential_request),
        )?;
        Ok(self)
    }

    pub fn from_thread(&self, thread_id: &str) -> bool {
        self.thread.is_reply(thread_id)
    }
}

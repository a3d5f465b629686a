use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::error::prelude::*;
use crate::messages::a2a::MessageId;
use crate::messages::attachment::{AttachmentId, Attachments};
use crate::messages::thread::Thread;
use crate::messages::timing::Timing;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Credential {
    #[serde(rename = "@id")]
    pub id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(rename = "credentials~attach")]
    pub credentials_attach: Attachments,
    #[serde(rename = "~thread")]
    pub thread: Thread,
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

impl Credential {
    pub fn create() -> Self {
        Credential::default()
    }

    pub fn set_thread_id(mut self, id: &str) -> Self {
        self.thread.thid = Some(id.to_string());
        self
    }

    pub fn set_credential(mut self, credential: String) -> VcxResult<Credential> {
        self.credentials_attach
            .add_base64_encoded_json_attachment(AttachmentId::Credential, Value::String(credential))?;
        Ok(self)
    }

    pub fn set_out_time(mut self) -> Self {
        self.timing = Some(Timing::out_now());
        self
    }
}

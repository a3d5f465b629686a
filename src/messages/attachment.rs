use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::error::prelude::*;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentId {
    #[serde(rename = "libindy-cred-offer-0")]
    CredentialOffer,
    #[serde(rename = "libindy-cred-request-0")]
    CredentialRequest,
    #[serde(rename = "libindy-cred-0")]
    Credential,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct Attachments(pub Vec<Attachment>);

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Attachment {
    #[serde(rename = "@id")]
    pub id: AttachmentId,
    #[serde(rename = "mime-type")]
    pub mime_type: String,
    pub data: AttachmentData,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AttachmentData {
    pub base64: String,
}

impl Attachments {
    pub fn new() -> Attachments {
        Attachments::default()
    }

    pub fn add_base64_encoded_json_attachment(
        &mut self,
        id: AttachmentId,
        json: Value,
    ) -> VcxResult<()> {
        let json = match json {
            Value::String(s) => s,
            value => serde_json::to_string(&value).map_err(|err| {
                VcxError::from_msg(
                    VcxErrorKind::InvalidJson,
                    format!("Cannot encode attachment: {}", err),
                )
            })?,
        };
        self.0.push(Attachment {
            id,
            mime_type: "application/json".to_string(),
            data: AttachmentData {
                base64: STANDARD.encode(json),
            },
        });
        Ok(())
    }

    /// Decoded JSON payload of the first attachment.
    pub fn content(&self) -> VcxResult<String> {
        let attachment = self.0.first().ok_or_else(|| {
            VcxError::from_msg(VcxErrorKind::InvalidJson, "Message has no attachment")
        })?;
        let decoded = STANDARD.decode(&attachment.data.base64).map_err(|err| {
            VcxError::from_msg(
                VcxErrorKind::InvalidJson,
                format!("Wrong bytes in attachment: {}", err),
            )
        })?;
        String::from_utf8(decoded).map_err(|err| {
            VcxError::from_msg(
                VcxErrorKind::InvalidJson,
                format!("Wrong bytes in attachment: {}", err),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _json() -> Value {
        serde_json::json!({"field": "value"})
    }

    #[test]
    fn test_create_with_json_attachment() {
        let mut attachments = Attachments::new();
        attachments
            .add_base64_encoded_json_attachment(AttachmentId::Credential, _json())
            .unwrap();
        assert_eq!(attachments.content().unwrap(), _json().to_string());
    }

    #[test]
    fn test_content_fails_without_attachment() {
        let attachments = Attachments::new();
        assert_eq!(
            attachments.content().unwrap_err().kind(),
            VcxErrorKind::InvalidJson
        );
    }
}

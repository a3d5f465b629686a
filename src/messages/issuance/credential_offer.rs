use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::error::prelude::*;
use crate::messages::a2a::MessageId;
use crate::messages::attachment::{AttachmentId, Attachments};
use crate::messages::timing::Timing;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct CredentialOffer {
    #[serde(rename = "@id")]
    pub id: MessageId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub credential_preview: CredentialPreview,
    #[serde(rename = "offers~attach")]
    pub offers_attach: Attachments,
    #[serde(rename = "~timing")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<Timing>,
}

impl CredentialOffer {
    pub fn create() -> Self {
        CredentialOffer::default()
    }

    pub fn set_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn set_credential_preview(mut self, credential_preview: CredentialPreview) -> Self {
        self.credential_preview = credential_preview;
        self
    }

    pub fn set_offers_attach(mut self, credential_offer: String) -> VcxResult<CredentialOffer> {
        self.offers_attach.add_base64_encoded_json_attachment(
            AttachmentId::CredentialOffer,
            Value::String(credential_offer),
        )?;
        Ok(self)
    }

    pub fn set_out_time(mut self) -> Self {
        self.timing = Some(Timing::out_now());
        self
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CredentialPreview {
    #[serde(rename = "@type")]
    pub msg_type: String,
    pub attributes: Vec<CredentialValue>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CredentialValue {
    pub name: String,
    pub value: String,
}

impl Default for CredentialPreview {
    fn default() -> CredentialPreview {
        CredentialPreview {
            msg_type: "https://didcomm.org/issue-credential/1.0/credential-preview".to_string(),
            attributes: vec![],
        }
    }
}

impl CredentialPreview {
    pub fn new() -> CredentialPreview {
        CredentialPreview::default()
    }

    /// Builds a preview from a JSON object of attribute names to values.
    /// Values may be plain strings or single-element arrays, both forms
    /// appear in the wild.
    pub fn from_attributes_json(credential_attributes: &str) -> VcxResult<CredentialPreview> {
        let attributes: serde_json::Map<String, Value> =
            serde_json::from_str(credential_attributes).map_err(|err| {
                VcxError::from_msg(
                    VcxErrorKind::InvalidAttributesStructure,
                    format!("Cannot parse credential attributes: {}", err),
                )
            })?;

        let mut preview = CredentialPreview::new();
        for (name, value) in attributes {
            let value = match value {
                Value::String(s) => s,
                Value::Array(ref values) => match values.first() {
                    Some(Value::String(s)) => s.clone(),
                    _ => value.to_string(),
                },
                value => value.to_string(),
            };
            preview.attributes.push(CredentialValue { name, value });
        }
        Ok(preview)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_preview_from_attributes_json() {
        let preview =
            CredentialPreview::from_attributes_json(r#"{"age": "25", "zip": ["87121"]}"#).unwrap();
        assert_eq!(preview.attributes.len(), 2);
        assert!(preview
            .attributes
            .contains(&CredentialValue { name: "age".to_string(), value: "25".to_string() }));
        assert!(preview
            .attributes
            .contains(&CredentialValue { name: "zip".to_string(), value: "87121".to_string() }));
    }

    #[test]
    fn test_preview_fails_on_non_object() {
        let err = CredentialPreview::from_attributes_json("[1, 2]").unwrap_err();
        assert_eq!(err.kind(), VcxErrorKind::InvalidAttributesStructure);
    }

    #[test]
    fn test_offer_attachment_content() {
        let offer = CredentialOffer::create()
            .set_offers_attach(r#"{"cred_def_id": "id"}"#.to_string())
            .unwrap();
        assert_eq!(offer.offers_attach.content().unwrap(), r#"{"cred_def_id": "id"}"#);
    }
}

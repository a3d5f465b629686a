use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::messages::issuance::credential::Credential;
use crate::messages::issuance::credential_offer::CredentialOffer;
use crate::messages::issuance::credential_request::CredentialRequest;

#[derive(Debug, PartialEq, Clone)]
pub enum A2AMessage {
    CredentialOffer(CredentialOffer),
    CredentialRequest(CredentialRequest),
    Credential(Credential),

    /// Any message of a family this crate does not handle.
    Generic(Value),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum A2AMessageKinds {
    #[serde(rename = "https://didcomm.org/issue-credential/1.0/offer-credential")]
    CredentialOffer,
    #[serde(rename = "https://didcomm.org/issue-credential/1.0/request-credential")]
    CredentialRequest,
    #[serde(rename = "https://didcomm.org/issue-credential/1.0/issue-credential")]
    Credential,
}

impl A2AMessage {
    pub fn kind(&self) -> Option<A2AMessageKinds> {
        match self {
            A2AMessage::CredentialOffer(_) => Some(A2AMessageKinds::CredentialOffer),
            A2AMessage::CredentialRequest(_) => Some(A2AMessageKinds::CredentialRequest),
            A2AMessage::Credential(_) => Some(A2AMessageKinds::Credential),
            A2AMessage::Generic(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for A2AMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer).map_err(de::Error::custom)?;

        let kind: A2AMessageKinds = match serde_json::from_value(value["@type"].clone()) {
            Ok(kind) => kind,
            Err(_) => return Ok(A2AMessage::Generic(value)),
        };

        match kind {
            A2AMessageKinds::CredentialOffer => CredentialOffer::deserialize(&value)
                .map(A2AMessage::CredentialOffer)
                .map_err(de::Error::custom),
            A2AMessageKinds::CredentialRequest => CredentialRequest::deserialize(&value)
                .map(A2AMessage::CredentialRequest)
                .map_err(de::Error::custom),
            A2AMessageKinds::Credential => Credential::deserialize(&value)
                .map(A2AMessage::Credential)
                .map_err(de::Error::custom),
        }
    }
}

fn set_a2a_message_type<T>(msg: &T, kind: A2AMessageKinds) -> Result<Value, serde_json::Error>
where
    T: Serialize,
{
    let mut value = serde_json::to_value(msg)?;
    let type_ = serde_json::to_value(kind)?;
    value
        .as_object_mut()
        .expect("A2A message must serialize to an object")
        .insert("@type".to_string(), type_);
    Ok(value)
}

impl Serialize for A2AMessage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = match self {
            A2AMessage::CredentialOffer(msg) => {
                set_a2a_message_type(msg, A2AMessageKinds::CredentialOffer)
            }
            A2AMessage::CredentialRequest(msg) => {
                set_a2a_message_type(msg, A2AMessageKinds::CredentialRequest)
            }
            A2AMessage::Credential(msg) => set_a2a_message_type(msg, A2AMessageKinds::Credential),
            A2AMessage::Generic(value) => Ok(value.clone()),
        }
        .map_err(ser::Error::custom)?;

        value.serialize(serializer)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn id() -> MessageId {
        MessageId(String::from("testid"))
    }

    pub fn new() -> MessageId {
        MessageId::default()
    }
}

impl Default for MessageId {
    #[cfg(test)]
    fn default() -> MessageId {
        MessageId::id()
    }

    #[cfg(not(test))]
    fn default() -> MessageId {
        MessageId(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod test_a2a_serialization {
    use super::*;
    use crate::messages::issuance::credential_request::CredentialRequest;

    #[test]
    fn test_serialization_sets_message_type() {
        let request = CredentialRequest::create()
            .set_requests_attach("{}".to_string())
            .unwrap();
        let message = A2AMessage::CredentialRequest(request);

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value["@type"],
            "https://didcomm.org/issue-credential/1.0/request-credential"
        );
        assert_eq!(value["@id"], "testid");
    }

    #[test]
    fn test_deserialization_round_trip() {
        let request = CredentialRequest::create()
            .set_requests_attach("{}".to_string())
            .unwrap();
        let message = A2AMessage::CredentialRequest(request);

        let serialized = serde_json::to_string(&message).unwrap();
        let deserialized: A2AMessage = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, message);
        assert_eq!(deserialized.kind(), Some(A2AMessageKinds::CredentialRequest));
    }

    #[test]
    fn test_unknown_message_type_falls_back_to_generic() {
        let json = r#"{"@type": "https://didcomm.org/notification/1.0/ack", "@id": "id", "status": "OK"}"#;
        let message: A2AMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(message, A2AMessage::Generic(_)));
        assert_eq!(message.kind(), None);
    }
}

use std::sync::Arc;

use crate::api::object_cache::ObjectCache;
use crate::errors::error::prelude::*;
use crate::messages::a2a::{A2AMessage, A2AMessageKinds};
use crate::transport::base_transport::BaseTransport;

lazy_static! {
    static ref CONNECTION_MAP: ObjectCache<Arc<dyn BaseTransport>> =
        ObjectCache::new("connections-cache");
}

/// Registers an established connection so protocol operations can refer to
/// it by handle. The connection itself (handshake, wire format) is owned by
/// the host application.
pub fn store_connection(transport: Arc<dyn BaseTransport>) -> VcxResult<u32> {
    CONNECTION_MAP.add(transport)
}

pub fn is_valid_handle(handle: u32) -> bool {
    CONNECTION_MAP.has_handle(handle)
}

fn get_transport(handle: u32) -> VcxResult<Arc<dyn BaseTransport>> {
    CONNECTION_MAP.get_cloned(handle).map_err(|err| {
        VcxError::from_msg(VcxErrorKind::InvalidConnectionHandle, err.to_string())
    })
}

/// Resolves a connection that is ready to carry protocol messages. A handle
/// that resolves to a half-open connection is as unusable as one that does
/// not resolve at all, both report an invalid connection handle.
pub fn get_ready_transport(handle: u32) -> VcxResult<Arc<dyn BaseTransport>> {
    let transport = get_transport(handle)?;
    if !transport.is_ready() {
        return Err(VcxError::from_msg(
            VcxErrorKind::InvalidConnectionHandle,
            format!("Connection {} is not ready to send messages", handle),
        ));
    }
    Ok(transport)
}

pub async fn send_message(handle: u32, message: &A2AMessage) -> VcxResult<()> {
    let transport = get_ready_transport(handle)?;
    transport.send_message(message).await
}

pub async fn poll_next_message(
    handle: u32,
    expected: A2AMessageKinds,
) -> VcxResult<Option<A2AMessage>> {
    let transport = get_transport(handle)?;
    transport.poll_next_message(expected).await
}

pub fn release(handle: u32) -> VcxResult<()> {
    CONNECTION_MAP.release(handle).map_err(|err| {
        VcxError::from_msg(VcxErrorKind::InvalidConnectionHandle, err.to_string())
    })
}

pub fn release_all() {
    CONNECTION_MAP.drain().ok();
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use crate::utils::mockdata::mock_transport::MockTransport;

    pub fn build_test_connection() -> u32 {
        store_connection(Arc::new(MockTransport::new())).unwrap()
    }

    pub fn build_test_connection_unready() -> u32 {
        store_connection(Arc::new(MockTransport::unready())).unwrap()
    }

    pub fn build_test_connection_with_message(message: A2AMessage) -> u32 {
        let transport = MockTransport::new();
        transport.push_message(message);
        store_connection(Arc::new(transport)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::*;
    use super::*;

    #[tokio::test]
    async fn test_send_message_fails_on_unknown_handle() {
        let err = send_message(0, &A2AMessage::Generic(serde_json::json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), VcxErrorKind::InvalidConnectionHandle);
    }

    #[tokio::test]
    async fn test_send_message_fails_on_unready_connection() {
        let handle = build_test_connection_unready();
        let err = send_message(handle, &A2AMessage::Generic(serde_json::json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), VcxErrorKind::InvalidConnectionHandle);
    }

    #[tokio::test]
    async fn test_poll_next_message_empty_connection() {
        let handle = build_test_connection();
        let message = poll_next_message(handle, A2AMessageKinds::CredentialRequest)
            .await
            .unwrap();
        assert!(message.is_none());
    }

    #[test]
    fn test_release_connection() {
        let handle = build_test_connection();
        release(handle).unwrap();
        assert_eq!(
            release(handle).unwrap_err().kind(),
            VcxErrorKind::InvalidConnectionHandle
        );
    }
}

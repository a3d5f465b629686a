use async_trait::async_trait;

use crate::errors::error::VcxResult;
use crate::messages::a2a::{A2AMessage, A2AMessageKinds};

/// Established pairwise channel to a Holder. The handshake that produces it
/// and the wire encoding it speaks are outside this crate; implementations
/// wrap whatever transport the host application runs on.
#[async_trait]
pub trait BaseTransport: Send + Sync {
    /// Whether the underlying channel finished its handshake and can carry
    /// protocol messages.
    fn is_ready(&self) -> bool;

    async fn send_message(&self, message: &A2AMessage) -> VcxResult<()>;

    /// Next inbound message of the expected kind, if one has arrived.
    /// Returning `None` is the normal "nothing yet" outcome, not an error.
    async fn poll_next_message(&self, expected: A2AMessageKinds) -> VcxResult<Option<A2AMessage>>;
}

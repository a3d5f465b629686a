use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::error::prelude::*;
use crate::messages::a2a::{A2AMessage, A2AMessageKinds};
use crate::transport::base_transport::BaseTransport;

/// In-memory [`BaseTransport`]: outbound messages are recorded, inbound
/// messages are whatever the test queued up front. Plays the role the mock
/// agency played for the original library.
pub struct MockTransport {
    ready: bool,
    inbound: Mutex<VecDeque<A2AMessage>>,
    sent: Mutex<Vec<A2AMessage>>,
    fail_sending: bool,
}

impl MockTransport {
    pub fn new() -> MockTransport {
        MockTransport {
            ready: true,
            inbound: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
            fail_sending: false,
        }
    }

    pub fn unready() -> MockTransport {
        MockTransport {
            ready: false,
            ..MockTransport::new()
        }
    }

    pub fn failing() -> MockTransport {
        MockTransport {
            fail_sending: true,
            ..MockTransport::new()
        }
    }

    pub fn push_message(&self, message: A2AMessage) {
        self.inbound
            .lock()
            .expect("mock transport inbound queue poisoned")
            .push_back(message);
    }

    pub fn sent_messages(&self) -> Vec<A2AMessage> {
        self.sent
            .lock()
            .expect("mock transport sent log poisoned")
            .clone()
    }
}

impl Default for MockTransport {
    fn default() -> MockTransport {
        MockTransport::new()
    }
}

#[async_trait]
impl BaseTransport for MockTransport {
    fn is_ready(&self) -> bool {
        self.ready
    }

    async fn send_message(&self, message: &A2AMessage) -> VcxResult<()> {
        if self.fail_sending {
            return Err(VcxError::from_msg(
                VcxErrorKind::PostMessageFailed,
                "Sending message timeout",
            ));
        }
        self.sent
            .lock()
            .expect("mock transport sent log poisoned")
            .push(message.clone());
        Ok(())
    }

    async fn poll_next_message(&self, expected: A2AMessageKinds) -> VcxResult<Option<A2AMessage>> {
        let mut inbound = self
            .inbound
            .lock()
            .expect("mock transport inbound queue poisoned");
        let position = inbound
            .iter()
            .position(|message| message.kind() == Some(expected));
        Ok(position.and_then(|position| inbound.remove(position)))
    }
}

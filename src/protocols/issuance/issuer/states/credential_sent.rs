use serde::{Deserialize, Serialize};

use crate::protocols::issuance::issuer::states::request_received::RequestReceivedState;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CredentialSentState {
    pub connection_handle: u32,
}

impl From<(RequestReceivedState, u32)> for CredentialSentState {
    fn from((_state, connection_handle): (RequestReceivedState, u32)) -> Self {
        trace!("SM is now in CredentialSent state");
        CredentialSentState { connection_handle }
    }
}

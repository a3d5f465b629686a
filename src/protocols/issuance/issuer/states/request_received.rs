use serde::{Deserialize, Serialize};

use crate::protocols::issuance::issuer::states::offer_sent::OfferSentState;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RequestReceivedState {
    pub offer: String,
    pub request: String,
    pub connection_handle: u32,
}

impl From<(OfferSentState, String)> for RequestReceivedState {
    fn from((state, request): (OfferSentState, String)) -> Self {
        trace!("SM is now in RequestReceived state");
        RequestReceivedState {
            offer: state.offer,
            request,
            connection_handle: state.connection_handle,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::protocols::issuance::issuer::states::initial::InitialState;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OfferSentState {
    /// Offer payload produced by the anoncreds backend, kept so the matching
    /// credential request can be bound to it at issuance time.
    pub offer: String,
    /// Process-local; reset to 0 when an exchange is rebuilt from its
    /// serialized form and re-attached by the next update_state call.
    pub connection_handle: u32,
}

impl From<(InitialState, String, u32)> for OfferSentState {
    fn from((_state, offer, connection_handle): (InitialState, String, u32)) -> Self {
        trace!("SM is now in OfferSent state");
        OfferSentState {
            offer,
            connection_handle,
        }
    }
}

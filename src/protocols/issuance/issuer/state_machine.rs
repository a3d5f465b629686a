use std::fmt::Display;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::error::prelude::*;
use crate::messages::issuance::credential_request::CredentialRequest;
use crate::payments::base_payment::PaymentTxn;
use crate::protocols::issuance::issuer::states::credential_sent::CredentialSentState;
use crate::protocols::issuance::issuer::states::initial::InitialState;
use crate::protocols::issuance::issuer::states::offer_sent::OfferSentState;
use crate::protocols::issuance::issuer::states::request_received::RequestReceivedState;
use crate::protocols::issuance::issuer::states::revoked::RevokedState;

/// Protocol position as reported to callers. `None` is never stored: it is
/// what reads against an unresolvable handle report, so "no exchange" stays
/// distinguishable from "exchange created but idle".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuerState {
    None,
    Initialized,
    OfferSent,
    RequestReceived,
    Accepted,
    Revoked,
}

impl From<IssuerState> for u32 {
    fn from(state: IssuerState) -> u32 {
        match state {
            IssuerState::None => 0,
            IssuerState::Initialized => 1,
            IssuerState::OfferSent => 2,
            IssuerState::RequestReceived => 3,
            IssuerState::Accepted => 4,
            IssuerState::Revoked => 5,
        }
    }
}

impl TryFrom<u32> for IssuerState {
    type Error = VcxError;

    fn try_from(code: u32) -> VcxResult<IssuerState> {
        match code {
            0 => Ok(IssuerState::None),
            1 => Ok(IssuerState::Initialized),
            2 => Ok(IssuerState::OfferSent),
            3 => Ok(IssuerState::RequestReceived),
            4 => Ok(IssuerState::Accepted),
            5 => Ok(IssuerState::Revoked),
            code => Err(VcxError::from_msg(
                VcxErrorKind::UnknownError,
                format!("Unknown issuer state code: {}", code),
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum IssuerFullState {
    Initial(InitialState),
    OfferSent(OfferSentState),
    RequestReceived(RequestReceivedState),
    CredentialSent(CredentialSentState),
    Revoked(RevokedState),
}

impl Display for IssuerFullState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            IssuerFullState::Initial(_) => f.write_str("Initial"),
            IssuerFullState::OfferSent(_) => f.write_str("OfferSent"),
            IssuerFullState::RequestReceived(_) => f.write_str("RequestReceived"),
            IssuerFullState::CredentialSent(_) => f.write_str("CredentialSent"),
            IssuerFullState::Revoked(_) => f.write_str("Revoked"),
        }
    }
}

impl Default for IssuerFullState {
    fn default() -> Self {
        Self::Initial(InitialState::default())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct IssuerSM {
    pub(crate) source_id: String,
    pub(crate) thread_id: String,
    pub(crate) cred_def_id: String,
    pub(crate) credential_attributes: String,
    pub(crate) credential_name: String,
    pub(crate) price: Option<u64>,
    pub(crate) rev_reg_id: Option<String>,
    pub(crate) tails_file: Option<String>,
    pub(crate) cred_rev_id: Option<String>,
    pub(crate) payment_txn: Option<PaymentTxn>,
    pub(crate) state: IssuerFullState,
}

impl IssuerSM {
    pub fn new(
        source_id: &str,
        cred_def_id: &str,
        credential_attributes: &str,
        credential_name: &str,
        price: Option<u64>,
        rev_reg_id: Option<String>,
        tails_file: Option<String>,
    ) -> Self {
        Self {
            source_id: source_id.to_string(),
            thread_id: Uuid::new_v4().to_string(),
            cred_def_id: cred_def_id.to_string(),
            credential_attributes: credential_attributes.to_string(),
            credential_name: credential_name.to_string(),
            price,
            rev_reg_id,
            tails_file,
            cred_rev_id: None,
            payment_txn: None,
            state: IssuerFullState::default(),
        }
    }

    pub fn get_source_id(&self) -> String {
        self.source_id.clone()
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn get_state(&self) -> IssuerState {
        match self.state {
            IssuerFullState::Initial(_) => IssuerState::Initialized,
            IssuerFullState::OfferSent(_) => IssuerState::OfferSent,
            IssuerFullState::RequestReceived(_) => IssuerState::RequestReceived,
            IssuerFullState::CredentialSent(_) => IssuerState::Accepted,
            IssuerFullState::Revoked(_) => IssuerState::Revoked,
        }
    }

    /// No further inbound message can advance the protocol from here.
    pub fn is_terminal_state(&self) -> bool {
        matches!(
            self.state,
            IssuerFullState::CredentialSent(_) | IssuerFullState::Revoked(_)
        )
    }

    pub fn connection_handle(&self) -> Option<u32> {
        let handle = match &self.state {
            IssuerFullState::OfferSent(state) => state.connection_handle,
            IssuerFullState::RequestReceived(state) => state.connection_handle,
            IssuerFullState::CredentialSent(state) => state.connection_handle,
            _ => 0,
        };
        match handle {
            0 => None,
            handle => Some(handle),
        }
    }

    /// Remembers the connection the caller supplied, returning the handle
    /// the next poll should use.
    pub fn maybe_update_connection_handle(&mut self, connection_handle: Option<u32>) -> Option<u32> {
        let connection_handle = connection_handle.or_else(|| self.connection_handle());
        if let Some(handle) = connection_handle {
            match &mut self.state {
                IssuerFullState::OfferSent(state) => state.connection_handle = handle,
                IssuerFullState::RequestReceived(state) => state.connection_handle = handle,
                IssuerFullState::CredentialSent(state) => state.connection_handle = handle,
                _ => {}
            }
        }
        connection_handle
    }

    pub fn mark_offer_sent(
        self,
        offer: String,
        sent_id: String,
        connection_handle: u32,
    ) -> VcxResult<Self> {
        let state = match self.state {
            IssuerFullState::Initial(state_data) => {
                IssuerFullState::OfferSent((state_data, offer, connection_handle).into())
            }
            state => {
                return Err(VcxError::from_msg(
                    VcxErrorKind::InvalidState,
                    format!("Can not send credential offer in current state {}", state),
                ));
            }
        };
        Ok(Self {
            thread_id: sent_id,
            state,
            ..self
        })
    }

    pub fn receive_request(self, request: &CredentialRequest, request_json: String) -> Self {
        let state = match self.state {
            IssuerFullState::OfferSent(state_data) => {
                if !request.from_thread(&self.thread_id) {
                    warn!(
                        "Credential request thread does not match exchange thread {}",
                        self.thread_id
                    );
                    IssuerFullState::OfferSent(state_data)
                } else {
                    IssuerFullState::RequestReceived((state_data, request_json).into())
                }
            }
            state => {
                warn!("Unable to receive credential request in state {}", state);
                state
            }
        };
        Self { state, ..self }
    }

    pub fn mark_credential_sent(
        self,
        cred_rev_id: Option<String>,
        payment_txn: Option<PaymentTxn>,
        connection_handle: u32,
    ) -> VcxResult<Self> {
        let state = match self.state {
            IssuerFullState::RequestReceived(state_data) => {
                IssuerFullState::CredentialSent((state_data, connection_handle).into())
            }
            state => {
                return Err(VcxError::from_msg(
                    VcxErrorKind::NotReady,
                    format!("Can not send credential in current state {}", state),
                ));
            }
        };
        let cred_rev_id = cred_rev_id.or_else(|| self.cred_rev_id.clone());
        let payment_txn = payment_txn.or_else(|| self.payment_txn.clone());
        Ok(Self {
            cred_rev_id,
            payment_txn,
            state,
            ..self
        })
    }

    /// Full revocation-registry coordinates, required before a credential
    /// can be revoked. Coordinates injected through deserialization are as
    /// authoritative as ones produced by issuance.
    pub fn revocation_details(&self) -> VcxResult<(String, String, String)> {
        match (&self.cred_rev_id, &self.rev_reg_id, &self.tails_file) {
            (Some(cred_rev_id), Some(rev_reg_id), Some(tails_file))
                if !cred_rev_id.is_empty() && !rev_reg_id.is_empty() && !tails_file.is_empty() =>
            {
                Ok((cred_rev_id.clone(), rev_reg_id.clone(), tails_file.clone()))
            }
            _ => Err(VcxError::from_msg(
                VcxErrorKind::InvalidRevocationDetails,
                "Missing revocation registry coordinates: credential can not be revoked",
            )),
        }
    }

    pub fn mark_revoked(self) -> Self {
        trace!("SM is now in Revoked state");
        Self {
            state: IssuerFullState::Revoked(RevokedState::default()),
            ..self
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::api::connection;
use crate::errors::error::prelude::*;
use crate::global::profile::{get_main_anoncreds, get_main_payment};
use crate::messages::a2a::{A2AMessage, A2AMessageKinds};
use crate::messages::issuance::credential::Credential;
use crate::messages::issuance::credential_offer::{CredentialOffer, CredentialPreview};
use crate::payments::base_payment::PaymentTxn;
use crate::protocols::issuance::issuer::state_machine::{IssuerFullState, IssuerSM, IssuerState};
use crate::protocols::issuance::issuer::states::credential_sent::CredentialSentState;
use crate::protocols::issuance::issuer::states::initial::InitialState;
use crate::protocols::issuance::issuer::states::offer_sent::OfferSentState;
use crate::protocols::issuance::issuer::states::request_received::RequestReceivedState;
use crate::protocols::issuance::issuer::states::revoked::RevokedState;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Issuer {
    issuer_sm: IssuerSM,
}

/// Credential-definition material resolved before an exchange is created.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IssuerConfig {
    pub cred_def_id: String,
    pub rev_reg_id: Option<String>,
    pub tails_file: Option<String>,
}

/// Portable form of an exchange. Field names are stable: serialized
/// exchanges outlive the process that wrote them.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct IssuerCredentialData {
    pub source_id: String,
    pub cred_def_id: String,
    pub credential_attributes: String,
    pub credential_name: String,
    pub state: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_offer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_request: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cred_rev_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev_reg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tails_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_txn: Option<PaymentTxn>,
}

impl Issuer {
    pub fn create(
        issuer_config: &IssuerConfig,
        credential_data: &str,
        credential_name: &str,
        price: Option<u64>,
        source_id: &str,
    ) -> VcxResult<Issuer> {
        trace!(
            "Issuer::create >>> issuer_config: {:?}, credential_data: {:?}, credential_name: {}, price: {:?}, source_id: {}",
            issuer_config,
            credential_data,
            credential_name,
            price,
            source_id
        );

        if source_id.is_empty() {
            return Err(VcxError::from_msg(
                VcxErrorKind::InvalidOption,
                "Source id must not be empty",
            ));
        }
        if credential_name.is_empty() {
            return Err(VcxError::from_msg(
                VcxErrorKind::InvalidOption,
                "Credential name must not be empty",
            ));
        }
        validate_credential_attributes(credential_data)?;

        let issuer_sm = IssuerSM::new(
            source_id,
            &issuer_config.cred_def_id,
            credential_data,
            credential_name,
            price,
            issuer_config.rev_reg_id.clone(),
            issuer_config.tails_file.clone(),
        );
        Ok(Issuer { issuer_sm })
    }

    pub fn get_state(&self) -> IssuerState {
        self.issuer_sm.get_state()
    }

    pub fn get_source_id(&self) -> String {
        self.issuer_sm.get_source_id()
    }

    pub fn get_credential_attributes(&self) -> String {
        self.issuer_sm.credential_attributes.clone()
    }

    pub fn is_terminal_state(&self) -> bool {
        self.issuer_sm.is_terminal_state()
    }

    pub async fn send_credential_offer(
        &mut self,
        connection_handle: u32,
        comment: Option<String>,
    ) -> VcxResult<()> {
        trace!(
            "Issuer::send_credential_offer >>> connection_handle: {}",
            connection_handle
        );
        if !matches!(self.issuer_sm.state, IssuerFullState::Initial(_)) {
            return Err(VcxError::from_msg(
                VcxErrorKind::InvalidState,
                format!(
                    "Can not send credential offer in current state {}",
                    self.issuer_sm.state
                ),
            ));
        }
        connection::get_ready_transport(connection_handle)?;

        let offer = get_main_anoncreds()?
            .issuer_create_credential_offer(&self.issuer_sm.cred_def_id)
            .await?;
        let preview = CredentialPreview::from_attributes_json(&self.issuer_sm.credential_attributes)?;
        let offer_msg = CredentialOffer::create()
            .set_credential_preview(preview)
            .set_comment(comment)
            .set_offers_attach(offer.clone())?
            .set_out_time();
        let sent_id = offer_msg.id.0.clone();

        connection::send_message(connection_handle, &A2AMessage::CredentialOffer(offer_msg)).await?;

        self.issuer_sm = self
            .issuer_sm
            .clone()
            .mark_offer_sent(offer, sent_id, connection_handle)?;
        Ok(())
    }

    /// Polls the connection for the next inbound message this exchange
    /// expects and advances a single step if one arrived. An exchange that
    /// has no connection attached (fresh, or rebuilt from serialized data)
    /// stays put.
    pub async fn update_state(&mut self, connection_handle: Option<u32>) -> VcxResult<IssuerState> {
        trace!("Issuer::update_state >>>");
        if self.issuer_sm.is_terminal_state() {
            return Ok(self.get_state());
        }
        let connection_handle = match self.issuer_sm.maybe_update_connection_handle(connection_handle)
        {
            Some(handle) if connection::is_valid_handle(handle) => handle,
            _ => return Ok(self.get_state()),
        };

        if matches!(self.issuer_sm.state, IssuerFullState::OfferSent(_)) {
            if let Some(message) =
                connection::poll_next_message(connection_handle, A2AMessageKinds::CredentialRequest)
                    .await?
            {
                self.process_message(message)?;
            }
        }
        Ok(self.get_state())
    }

    /// Same single-step advance as [`Issuer::update_state`], driven by a
    /// message the caller already holds. Messages of a kind the current
    /// state does not expect are ignored.
    pub fn process_message(&mut self, message: A2AMessage) -> VcxResult<IssuerState> {
        match message {
            A2AMessage::CredentialRequest(request) => {
                let request_json = request.requests_attach.content()?;
                self.issuer_sm = self.issuer_sm.clone().receive_request(&request, request_json);
            }
            message => {
                warn!(
                    "Ignoring message not expected by the issuance exchange: {:?}",
                    message.kind()
                );
            }
        }
        Ok(self.get_state())
    }

    pub async fn send_credential(&mut self, connection_handle: u32) -> VcxResult<()> {
        trace!(
            "Issuer::send_credential >>> connection_handle: {}",
            connection_handle
        );
        let (offer, request) = match &self.issuer_sm.state {
            IssuerFullState::RequestReceived(state) => (state.offer.clone(), state.request.clone()),
            state => {
                return Err(VcxError::from_msg(
                    VcxErrorKind::NotReady,
                    format!("Can not send credential in current state {}", state),
                ));
            }
        };
        connection::get_ready_transport(connection_handle)?;

        let (credential, cred_rev_id) = get_main_anoncreds()?
            .issuer_create_credential(
                &offer,
                &request,
                &self.issuer_sm.credential_attributes,
                self.issuer_sm.rev_reg_id.clone(),
                self.issuer_sm.tails_file.clone(),
            )
            .await?;

        let payment_txn = match self.issuer_sm.price {
            Some(price) if price > 0 => Some(get_main_payment()?.pay(price).await?),
            _ => None,
        };

        let credential_msg = Credential::create()
            .set_thread_id(self.issuer_sm.thread_id())
            .set_credential(credential)?
            .set_out_time();

        connection::send_message(connection_handle, &A2AMessage::Credential(credential_msg)).await?;

        self.issuer_sm = self.issuer_sm.clone().mark_credential_sent(
            cred_rev_id,
            payment_txn,
            connection_handle,
        )?;
        Ok(())
    }

    pub async fn revoke_credential(&mut self) -> VcxResult<()> {
        trace!("Issuer::revoke_credential >>>");
        let (cred_rev_id, rev_reg_id, tails_file) = self.issuer_sm.revocation_details()?;
        get_main_anoncreds()?
            .revoke_credential(&tails_file, &rev_reg_id, &cred_rev_id)
            .await?;
        self.issuer_sm = self.issuer_sm.clone().mark_revoked();
        Ok(())
    }

    /// Payment evidence for a priced exchange. Exchanges without a price
    /// have no payment side at all and always report `None`.
    pub fn get_payment_txn(&self) -> VcxResult<Option<PaymentTxn>> {
        match self.issuer_sm.price {
            None | Some(0) => Ok(None),
            Some(_) => match &self.issuer_sm.payment_txn {
                Some(txn) => Ok(Some(txn.clone())),
                None => Err(VcxError::from_msg(
                    VcxErrorKind::NoPaymentInformation,
                    "Payment is not settled until the credential is accepted",
                )),
            },
        }
    }

    pub fn to_data(&self) -> IssuerCredentialData {
        let sm = &self.issuer_sm;
        let (credential_offer, credential_request) = match &sm.state {
            IssuerFullState::OfferSent(state) => (Some(state.offer.clone()), None),
            IssuerFullState::RequestReceived(state) => {
                (Some(state.offer.clone()), Some(state.request.clone()))
            }
            _ => (None, None),
        };
        IssuerCredentialData {
            source_id: sm.source_id.clone(),
            cred_def_id: sm.cred_def_id.clone(),
            credential_attributes: sm.credential_attributes.clone(),
            credential_name: sm.credential_name.clone(),
            state: sm.get_state().into(),
            price: sm.price,
            thread_id: Some(sm.thread_id.clone()),
            credential_offer,
            credential_request,
            cred_rev_id: sm.cred_rev_id.clone(),
            rev_reg_id: sm.rev_reg_id.clone(),
            tails_file: sm.tails_file.clone(),
            payment_txn: sm.payment_txn.clone(),
        }
    }

    pub fn from_data(data: IssuerCredentialData) -> VcxResult<Issuer> {
        if data.source_id.is_empty() {
            return Err(VcxError::from_msg(
                VcxErrorKind::UnknownError,
                "Source id must not be empty",
            ));
        }
        validate_credential_attributes(&data.credential_attributes).map_err(|err| {
            VcxError::from_msg(VcxErrorKind::UnknownError, err.to_string())
        })?;

        let state = match IssuerState::try_from(data.state)? {
            IssuerState::Initialized => IssuerFullState::Initial(InitialState::default()),
            IssuerState::OfferSent => IssuerFullState::OfferSent(OfferSentState {
                offer: required_field(data.credential_offer.clone(), "credential_offer")?,
                connection_handle: 0,
            }),
            IssuerState::RequestReceived => IssuerFullState::RequestReceived(RequestReceivedState {
                offer: required_field(data.credential_offer.clone(), "credential_offer")?,
                request: required_field(data.credential_request.clone(), "credential_request")?,
                connection_handle: 0,
            }),
            IssuerState::Accepted => {
                IssuerFullState::CredentialSent(CredentialSentState { connection_handle: 0 })
            }
            IssuerState::Revoked => IssuerFullState::Revoked(RevokedState::default()),
            IssuerState::None => {
                return Err(VcxError::from_msg(
                    VcxErrorKind::UnknownError,
                    "A live exchange can not be in state None",
                ));
            }
        };

        let issuer_sm = IssuerSM {
            source_id: data.source_id,
            thread_id: data.thread_id.unwrap_or_default(),
            cred_def_id: data.cred_def_id,
            credential_attributes: data.credential_attributes,
            credential_name: data.credential_name,
            price: data.price,
            rev_reg_id: data.rev_reg_id,
            tails_file: data.tails_file,
            cred_rev_id: data.cred_rev_id,
            payment_txn: data.payment_txn,
            state,
        };
        Ok(Issuer { issuer_sm })
    }
}

fn required_field<T>(field: Option<T>, name: &str) -> VcxResult<T> {
    field.ok_or_else(|| {
        VcxError::from_msg(
            VcxErrorKind::UnknownError,
            format!("Field {} is required in this state", name),
        )
    })
}

fn validate_credential_attributes(credential_data: &str) -> VcxResult<()> {
    let attributes: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(credential_data).map_err(|err| {
            VcxError::from_msg(
                VcxErrorKind::InvalidAttributesStructure,
                format!("Invalid credential attributes: {}", err),
            )
        })?;
    if attributes.is_empty() {
        return Err(VcxError::from_msg(
            VcxErrorKind::InvalidAttributesStructure,
            "Credential attributes must not be empty",
        ));
    }
    Ok(())
}

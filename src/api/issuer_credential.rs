use serde::{Deserialize, Serialize};
use serde_json;

use crate::api::credential_def;
use crate::api::object_cache::ObjectCache;
use crate::errors::error::prelude::*;
use crate::handlers::issuance::issuer::{Issuer, IssuerConfig, IssuerCredentialData};
use crate::messages::a2a::A2AMessage;
use crate::payments::base_payment::PaymentTxn;
use crate::protocols::issuance::issuer::state_machine::IssuerState;

lazy_static! {
    static ref ISSUER_CREDENTIAL_MAP: ObjectCache<Issuer> =
        ObjectCache::new("issuer-credentials-cache");
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "version", content = "data")]
enum IssuerCredentials {
    #[serde(rename = "1.0")]
    V1(IssuerCredentialData),
}

fn handle_err(err: VcxError) -> VcxError {
    if err.kind() == VcxErrorKind::InvalidHandle {
        VcxError::from_msg(VcxErrorKind::InvalidIssuerCredentialHandle, err.to_string())
    } else {
        err
    }
}

pub fn issuer_credential_create(
    cred_def_handle: u32,
    source_id: String,
    credential_name: String,
    credential_data: String,
    price: Option<u64>,
) -> VcxResult<u32> {
    trace!(
        "issuer_credential_create >>> cred_def_handle: {}, source_id: {}, credential_name: {}, credential_data: {:?}, price: {:?}",
        cred_def_handle,
        source_id,
        credential_name,
        credential_data,
        price
    );
    let issuer_config = IssuerConfig {
        cred_def_id: credential_def::get_cred_def_id(cred_def_handle)?,
        rev_reg_id: credential_def::get_rev_reg_id(cred_def_handle)?,
        tails_file: credential_def::get_tails_file(cred_def_handle)?,
    };
    let issuer = Issuer::create(
        &issuer_config,
        &credential_data,
        &credential_name,
        price,
        &source_id,
    )?;
    ISSUER_CREDENTIAL_MAP.add(issuer)
}

pub async fn send_credential_offer(handle: u32, connection_handle: u32) -> VcxResult<()> {
    let mut credential = ISSUER_CREDENTIAL_MAP.get_cloned(handle).map_err(handle_err)?;
    credential.send_credential_offer(connection_handle, None).await?;
    ISSUER_CREDENTIAL_MAP.insert(handle, credential)
}

/// Polls the connection for the next message the exchange expects and
/// advances one step if it arrived. Reports `IssuerState::None` for handles
/// that were never created or already released: a routine poll must be able
/// to tell "no exchange" apart from "exchange is idle" without failing.
pub async fn update_state(handle: u32, connection_handle: Option<u32>) -> VcxResult<IssuerState> {
    trace!("issuer_credential::update_state >>>");
    let mut credential = match ISSUER_CREDENTIAL_MAP.get_cloned(handle) {
        Ok(credential) => credential,
        Err(_) => return Ok(IssuerState::None),
    };
    let state = credential.update_state(connection_handle).await?;
    ISSUER_CREDENTIAL_MAP.insert(handle, credential)?;
    Ok(state)
}

/// Variant of [`update_state`] driven by a message the caller already
/// received out of band.
pub async fn update_state_with_message(handle: u32, message: &str) -> VcxResult<IssuerState> {
    trace!("issuer_credential::update_state_with_message >>>");
    let mut credential = ISSUER_CREDENTIAL_MAP.get_cloned(handle).map_err(handle_err)?;
    let message: A2AMessage = serde_json::from_str(message).map_err(|err| {
        VcxError::from_msg(
            VcxErrorKind::InvalidOption,
            format!("Cannot update state: Message deserialization failed: {:?}", err),
        )
    })?;
    let state = credential.process_message(message)?;
    ISSUER_CREDENTIAL_MAP.insert(handle, credential)?;
    Ok(state)
}

pub fn get_state(handle: u32) -> IssuerState {
    ISSUER_CREDENTIAL_MAP
        .get(handle, |credential| Ok(credential.get_state()))
        .unwrap_or(IssuerState::None)
}

pub async fn send_credential(handle: u32, connection_handle: u32) -> VcxResult<()> {
    let mut credential = ISSUER_CREDENTIAL_MAP.get_cloned(handle).map_err(handle_err)?;
    credential.send_credential(connection_handle).await?;
    ISSUER_CREDENTIAL_MAP.insert(handle, credential)
}

pub async fn revoke_credential(handle: u32) -> VcxResult<()> {
    trace!("revoke_credential >>> handle: {}", handle);
    let mut credential = ISSUER_CREDENTIAL_MAP.get_cloned(handle).map_err(handle_err)?;
    credential.revoke_credential().await?;
    ISSUER_CREDENTIAL_MAP.insert(handle, credential)
}

/// Payment facet of the exchange, keyed by the same handle.
pub fn get_payment_txn(handle: u32) -> VcxResult<Option<PaymentTxn>> {
    ISSUER_CREDENTIAL_MAP
        .get(handle, |credential| credential.get_payment_txn())
        .map_err(handle_err)
}

pub fn get_source_id(handle: u32) -> VcxResult<String> {
    ISSUER_CREDENTIAL_MAP
        .get(handle, |credential| Ok(credential.get_source_id()))
        .map_err(handle_err)
}

pub fn get_credential_attributes(handle: u32) -> VcxResult<String> {
    ISSUER_CREDENTIAL_MAP
        .get(handle, |credential| Ok(credential.get_credential_attributes()))
        .map_err(handle_err)
}

pub fn to_string(handle: u32) -> VcxResult<String> {
    ISSUER_CREDENTIAL_MAP
        .get(handle, |credential| {
            serde_json::to_string(&IssuerCredentials::V1(credential.to_data())).map_err(|err| {
                VcxError::from_msg(
                    VcxErrorKind::InvalidState,
                    format!("cannot serialize IssuerCredential object: {:?}", err),
                )
            })
        })
        .map_err(handle_err)
}

pub fn from_string(credential_data: &str) -> VcxResult<u32> {
    let issuer_credential: IssuerCredentials =
        serde_json::from_str(credential_data).map_err(|err| {
            VcxError::from_msg(
                VcxErrorKind::InvalidJson,
                format!("Cannot deserialize IssuerCredential: {:?}", err),
            )
        })?;

    match issuer_credential {
        IssuerCredentials::V1(data) => ISSUER_CREDENTIAL_MAP.add(Issuer::from_data(data)?),
    }
}

pub fn release(handle: u32) -> VcxResult<()> {
    ISSUER_CREDENTIAL_MAP.release(handle).map_err(handle_err)
}

pub fn release_all() {
    ISSUER_CREDENTIAL_MAP.drain().ok();
}

pub fn is_valid_handle(handle: u32) -> bool {
    ISSUER_CREDENTIAL_MAP.has_handle(handle)
}

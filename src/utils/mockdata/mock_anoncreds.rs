use async_trait::async_trait;

use crate::anoncreds::base_anoncreds::BaseAnonCreds;
use crate::errors::error::prelude::*;
use crate::utils::constants::{CRED_REV_ID, CREDENTIAL_JSON, LIBINDY_CRED_OFFER};

/// Implementation of [`BaseAnonCreds`] which responds with mock data.
#[derive(Debug)]
pub struct MockAnonCreds;

#[async_trait]
impl BaseAnonCreds for MockAnonCreds {
    async fn issuer_create_credential_offer(&self, _cred_def_id: &str) -> VcxResult<String> {
        Ok(LIBINDY_CRED_OFFER.to_string())
    }

    async fn issuer_create_credential(
        &self,
        _cred_offer_json: &str,
        _cred_req_json: &str,
        _cred_values_json: &str,
        rev_reg_id: Option<String>,
        _tails_file: Option<String>,
    ) -> VcxResult<(String, Option<String>)> {
        let cred_rev_id = rev_reg_id.map(|_| CRED_REV_ID.to_string());
        Ok((CREDENTIAL_JSON.to_string(), cred_rev_id))
    }

    async fn revoke_credential(
        &self,
        _tails_file: &str,
        _rev_reg_id: &str,
        _cred_rev_id: &str,
    ) -> VcxResult<()> {
        Ok(())
    }
}

/// Mock anoncreds backend whose every call fails, for driving error paths.
#[derive(Debug)]
pub struct MockAnonCredsFailing;

fn _unavailable<T>(method: &str) -> VcxResult<T> {
    Err(VcxError::from_msg(
        VcxErrorKind::IOError,
        format!("mock method failed: {}", method),
    ))
}

#[async_trait]
impl BaseAnonCreds for MockAnonCredsFailing {
    async fn issuer_create_credential_offer(&self, _cred_def_id: &str) -> VcxResult<String> {
        _unavailable("issuer_create_credential_offer")
    }

    async fn issuer_create_credential(
        &self,
        _cred_offer_json: &str,
        _cred_req_json: &str,
        _cred_values_json: &str,
        _rev_reg_id: Option<String>,
        _tails_file: Option<String>,
    ) -> VcxResult<(String, Option<String>)> {
        _unavailable("issuer_create_credential")
    }

    async fn revoke_credential(
        &self,
        _tails_file: &str,
        _rev_reg_id: &str,
        _cred_rev_id: &str,
    ) -> VcxResult<()> {
        _unavailable("revoke_credential")
    }
}

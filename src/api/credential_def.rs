use serde::{Deserialize, Serialize};

use crate::api::object_cache::ObjectCache;
use crate::errors::error::prelude::*;

lazy_static! {
    static ref CREDENTIALDEF_MAP: ObjectCache<CredentialDef> =
        ObjectCache::new("credential-defs-cache");
}

/// Reference to credential-definition material held by the wallet: the
/// ledger id plus, for revocable definitions, the registry coordinates
/// issuance will stamp onto credentials.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CredentialDef {
    source_id: String,
    cred_def_id: String,
    rev_reg_id: Option<String>,
    tails_file: Option<String>,
}

pub fn create(
    source_id: &str,
    cred_def_id: &str,
    rev_reg_id: Option<String>,
    tails_file: Option<String>,
) -> VcxResult<u32> {
    trace!(
        "credential_def::create >>> source_id: {}, cred_def_id: {}",
        source_id,
        cred_def_id
    );
    if cred_def_id.is_empty() {
        return Err(VcxError::from_msg(
            VcxErrorKind::InvalidConfiguration,
            "Credential definition id must not be empty",
        ));
    }
    CREDENTIALDEF_MAP.add(CredentialDef {
        source_id: source_id.to_string(),
        cred_def_id: cred_def_id.to_string(),
        rev_reg_id,
        tails_file,
    })
}

pub fn is_valid_handle(handle: u32) -> bool {
    CREDENTIALDEF_MAP.has_handle(handle)
}

pub fn get_cloned(handle: u32) -> VcxResult<CredentialDef> {
    CREDENTIALDEF_MAP
        .get_cloned(handle)
        .map_err(|err| VcxError::from_msg(VcxErrorKind::InvalidCredDefHandle, err.to_string()))
}

pub fn get_cred_def_id(handle: u32) -> VcxResult<String> {
    Ok(get_cloned(handle)?.cred_def_id)
}

pub fn get_rev_reg_id(handle: u32) -> VcxResult<Option<String>> {
    Ok(get_cloned(handle)?.rev_reg_id)
}

pub fn get_tails_file(handle: u32) -> VcxResult<Option<String>> {
    Ok(get_cloned(handle)?.tails_file)
}

pub fn get_source_id(handle: u32) -> VcxResult<String> {
    Ok(get_cloned(handle)?.source_id)
}

pub fn release(handle: u32) -> VcxResult<()> {
    CREDENTIALDEF_MAP
        .release(handle)
        .map_err(|err| VcxError::from_msg(VcxErrorKind::InvalidCredDefHandle, err.to_string()))
}

pub fn release_all() {
    CREDENTIALDEF_MAP.drain().ok();
}

impl CredentialDef {
    pub fn cred_def_id(&self) -> &str {
        &self.cred_def_id
    }

    pub fn rev_reg_id(&self) -> Option<String> {
        self.rev_reg_id.clone()
    }

    pub fn tails_file(&self) -> Option<String> {
        self.tails_file.clone()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::utils::constants::{CRED_DEF_ID, REV_REG_ID, TAILS_FILE};

    pub fn create_cred_def_fake() -> u32 {
        create("defaultCredentialDefId", CRED_DEF_ID, None, None).unwrap()
    }

    pub fn create_revocable_cred_def_fake() -> u32 {
        create(
            "revocableCredentialDefId",
            CRED_DEF_ID,
            Some(REV_REG_ID.to_string()),
            Some(TAILS_FILE.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_create_succeeds() {
        let handle = create_cred_def_fake();
        assert!(handle > 0);
        assert_eq!(get_cred_def_id(handle).unwrap(), CRED_DEF_ID);
        assert_eq!(get_rev_reg_id(handle).unwrap(), None);
    }

    #[test]
    fn test_create_fails_on_empty_id() {
        let err = create("1", "", None, None).unwrap_err();
        assert_eq!(err.kind(), VcxErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_get_fails_on_released_handle() {
        let handle = create_cred_def_fake();
        release(handle).unwrap();
        assert_eq!(
            get_cred_def_id(handle).unwrap_err().kind(),
            VcxErrorKind::InvalidCredDefHandle
        );
    }
}

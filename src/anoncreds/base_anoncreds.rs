use async_trait::async_trait;

use crate::errors::error::VcxResult;

/// Issuer-side credential material provider: the wallet holding the signing
/// keys plus the revocation registry it maintains. Payloads are the opaque
/// JSON blobs the anoncreds implementation exchanges with the Holder.
#[async_trait]
pub trait BaseAnonCreds: Send + Sync {
    async fn issuer_create_credential_offer(&self, cred_def_id: &str) -> VcxResult<String>;

    /// Signs a credential over the given values, binding it to the Holder's
    /// request. Returns the credential payload and, when the credential
    /// definition supports revocation, the credential revocation id.
    async fn issuer_create_credential(
        &self,
        cred_offer_json: &str,
        cred_req_json: &str,
        cred_values_json: &str,
        rev_reg_id: Option<String>,
        tails_file: Option<String>,
    ) -> VcxResult<(String, Option<String>)>;

    async fn revoke_credential(
        &self,
        tails_file: &str,
        rev_reg_id: &str,
        cred_rev_id: &str,
    ) -> VcxResult<()>;
}

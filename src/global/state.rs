use crate::api;
use crate::global::profile;

/// Tears down every piece of process-wide state: all outstanding exchange,
/// connection and credential-definition handles, plus the injected backends.
/// Callers that abandon work mid-protocol must route through here (or
/// release handles individually) so the collaborator-side bookkeeping behind
/// each handle is torn down deterministically.
pub fn state_vcx_shutdown() {
    api::issuer_credential::release_all();
    api::connection::release_all();
    api::credential_def::release_all();
    profile::reset_main_profile().ok();
}

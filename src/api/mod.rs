pub mod connection;
pub mod credential_def;
pub mod issuer_credential;
pub mod object_cache;

pub mod credential_sent;
pub mod initial;
pub mod offer_sent;
pub mod request_received;
pub mod revoked;

#![crate_name = "vcx_issuance"]

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod anoncreds;
pub mod api;
pub mod errors;
pub mod global;
pub mod handlers;
pub mod messages;
pub mod payments;
pub mod protocols;
pub mod transport;
pub mod utils;

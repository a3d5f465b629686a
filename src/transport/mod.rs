pub mod base_transport;

pub mod mock_anoncreds;
pub mod mock_payment;
pub mod mock_transport;
pub mod mockdata_credex;

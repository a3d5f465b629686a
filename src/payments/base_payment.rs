use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::error::VcxResult;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentTxn {
    pub amount: u64,
    pub credit: bool,
    pub inputs: Vec<String>,
    pub outputs: Vec<PaymentOutput>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutput {
    pub recipient: String,
    pub amount: u64,
}

/// Settles issuance fees. Only consulted for priced credentials; a zero or
/// absent price never reaches this trait.
#[async_trait]
pub trait BasePayment: Send + Sync {
    async fn pay(&self, amount: u64) -> VcxResult<PaymentTxn>;
}

use async_trait::async_trait;

use crate::errors::error::prelude::*;
use crate::payments::base_payment::{BasePayment, PaymentOutput, PaymentTxn};
use crate::utils::constants::{PAYMENT_INPUT, PAYMENT_RECIPIENT};

/// Implementation of [`BasePayment`] which settles every fee instantly.
#[derive(Debug)]
pub struct MockPayment;

#[async_trait]
impl BasePayment for MockPayment {
    async fn pay(&self, amount: u64) -> VcxResult<PaymentTxn> {
        Ok(PaymentTxn {
            amount,
            credit: false,
            inputs: vec![PAYMENT_INPUT.to_string()],
            outputs: vec![PaymentOutput {
                recipient: PAYMENT_RECIPIENT.to_string(),
                amount,
            }],
        })
    }
}

/// Mock payment backend with an empty purse.
#[derive(Debug)]
pub struct MockPaymentFailing;

#[async_trait]
impl BasePayment for MockPaymentFailing {
    async fn pay(&self, _amount: u64) -> VcxResult<PaymentTxn> {
        Err(VcxError::from_msg(
            VcxErrorKind::InsufficientTokenAmount,
            "Not enough tokens to settle the issuance fee",
        ))
    }
}

use std::sync::{Arc, RwLock};

use crate::anoncreds::base_anoncreds::BaseAnonCreds;
use crate::errors::error::prelude::*;
use crate::payments::base_payment::BasePayment;

lazy_static! {
    pub static ref GLOBAL_BASE_ANONCREDS: RwLock<Option<Arc<dyn BaseAnonCreds>>> =
        RwLock::new(None);
    pub static ref GLOBAL_BASE_PAYMENT: RwLock<Option<Arc<dyn BasePayment>>> = RwLock::new(None);
}

pub fn setup_anoncreds(anoncreds: Arc<dyn BaseAnonCreds>) -> VcxResult<()> {
    let mut global = GLOBAL_BASE_ANONCREDS.write()?;
    *global = Some(anoncreds);
    Ok(())
}

pub fn setup_payment(payment: Arc<dyn BasePayment>) -> VcxResult<()> {
    let mut global = GLOBAL_BASE_PAYMENT.write()?;
    *global = Some(payment);
    Ok(())
}

pub fn get_main_anoncreds() -> VcxResult<Arc<dyn BaseAnonCreds>> {
    let anoncreds = GLOBAL_BASE_ANONCREDS.read()?;
    anoncreds.as_ref().cloned().ok_or_else(|| {
        VcxError::from_msg(VcxErrorKind::NotReady, "Anoncreds backend is not initialized")
    })
}

pub fn get_main_payment() -> VcxResult<Arc<dyn BasePayment>> {
    let payment = GLOBAL_BASE_PAYMENT.read()?;
    payment.as_ref().cloned().ok_or_else(|| {
        VcxError::from_msg(VcxErrorKind::NotReady, "Payment backend is not initialized")
    })
}

pub fn reset_main_profile() -> VcxResult<()> {
    let mut anoncreds = GLOBAL_BASE_ANONCREDS.write()?;
    *anoncreds = None;
    let mut payment = GLOBAL_BASE_PAYMENT.write()?;
    *payment = None;
    Ok(())
}

use std::error::Error;
use std::fmt;
use std::sync::PoisonError;

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum VcxErrorKind {
    // Common
    #[error("Object is in invalid state for requested operation")]
    InvalidState,
    #[error("Invalid Configuration")]
    InvalidConfiguration,
    #[error("Obj was not found with handle")]
    InvalidHandle,
    #[error("Invalid JSON string")]
    InvalidJson,
    #[error("Invalid Option")]
    InvalidOption,
    #[error("Object not ready for specified action")]
    NotReady,
    #[error("IO Error, possibly creating a backup wallet")]
    IOError,

    // Connection
    #[error("Invalid Connection Handle")]
    InvalidConnectionHandle,
    #[error("Message failed in post")]
    PostMessageFailed,

    // Payment
    #[error("No payment information associated with object")]
    NoPaymentInformation,
    #[error("Insufficient amount of tokens to process request")]
    InsufficientTokenAmount,

    // Credential Definition
    #[error("Invalid Credential Definition handle")]
    InvalidCredDefHandle,

    // Issuer Credential
    #[error("Invalid Credential Issuer Handle")]
    InvalidIssuerCredentialHandle,
    #[error("Attributes provided to Credential Offer are not correct, possibly malformed")]
    InvalidAttributesStructure,

    // Revocation
    #[error("Invalid Revocation Details")]
    InvalidRevocationDetails,

    // Validation
    #[error("Unable to serialize")]
    SerializationError,
    #[error("Unknown Error")]
    UnknownError,

    #[error("Attempted to unlock poisoned lock")]
    PoisonedLock,
}

#[derive(Debug, thiserror::Error)]
pub struct VcxError {
    msg: String,
    kind: VcxErrorKind,
}

impl fmt::Display for VcxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Error: {}\n", self.msg)?;
        let mut current = self.source();
        while let Some(cause) = current {
            writeln!(f, "Caused by:\n\t{}", cause)?;
            current = cause.source();
        }
        Ok(())
    }
}

impl VcxError {
    pub fn from_msg<D>(kind: VcxErrorKind, msg: D) -> VcxError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        VcxError {
            msg: msg.to_string(),
            kind,
        }
    }

    pub fn kind(&self) -> VcxErrorKind {
        self.kind
    }
}

impl From<VcxErrorKind> for VcxError {
    fn from(kind: VcxErrorKind) -> VcxError {
        VcxError {
            msg: kind.to_string(),
            kind,
        }
    }
}

impl<T> From<PoisonError<T>> for VcxError {
    fn from(err: PoisonError<T>) -> Self {
        VcxError::from_msg(VcxErrorKind::PoisonedLock, err.to_string())
    }
}

pub fn err_msg<D>(kind: VcxErrorKind, msg: D) -> VcxError
where
    D: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    VcxError::from_msg(kind, msg)
}

pub type VcxResult<T> = Result<T, VcxError>;

pub mod prelude {
    pub use crate::errors::error::{err_msg, VcxError, VcxErrorKind, VcxResult};
}

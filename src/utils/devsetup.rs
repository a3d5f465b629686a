use std::sync::{Arc, Once};

use crate::global::profile;
use crate::utils::mockdata::mock_anoncreds::MockAnonCreds;
use crate::utils::mockdata::mock_payment::MockPayment;

static TEST_LOGGING_INIT: Once = Once::new();

pub fn init_test_logging() {
    TEST_LOGGING_INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init()
            .ok();
    })
}

/// Sets up logging and installs mock collaborator backends. Tests share the
/// process-wide profile, so installing the same mocks repeatedly is fine;
/// tests must not install failing backends globally.
pub struct SetupMocks;

impl SetupMocks {
    pub fn init() -> SetupMocks {
        init_test_logging();
        profile::setup_anoncreds(Arc::new(MockAnonCreds)).expect("cannot install mock anoncreds");
        profile::setup_payment(Arc::new(MockPayment)).expect("cannot install mock payment");
        SetupMocks
    }
}

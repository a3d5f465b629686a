pub const OBJECT_SERIALIZE_VERSION: &str = "1.0";

pub const CRED_DEF_ID: &str = "2hoqvcwupRTUNkXn6ArYzs:3:CL:2471";
pub const REV_REG_ID: &str =
    "2hoqvcwupRTUNkXn6ArYzs:4:2hoqvcwupRTUNkXn6ArYzs:3:CL:2471:CL_ACCUM:TAG1";
pub const TAILS_FILE: &str = "/tmp/tails/5AiF2Dw3c5MBH7J4cUvJ7m";
pub const CRED_REV_ID: &str = "15";

pub const LIBINDY_CRED_OFFER: &str = r#"{"schema_id":"NcYxiDXkpYi6ov5FcYDi1e:2:gvt:1.0","cred_def_id":"NcYxiDXkpYi6ov5FcYDi1e:3:CL:NcYxiDXkpYi6ov5FcYDi1e:2:gvt:1.0:TAG1","nonce":"400156503230960246786174","key_correctness_proof":{}}"#;

pub const CREDENTIAL_JSON: &str = r#"{"schema_id":"NcYxiDXkpYi6ov5FcYDi1e:2:gvt:1.0","cred_def_id":"NcYxiDXkpYi6ov5FcYDi1e:3:CL:NcYxiDXkpYi6ov5FcYDi1e:2:gvt:1.0:TAG1","values":{"attr":{"raw":"value","encoded":"83433589328941790914156491142513866934807110557901236234364301304647"}},"signature":{},"signature_correctness_proof":{}}"#;

pub const PAYMENT_INPUT: &str = "pay:null:9UFgyjuJxi1i1HD";
pub const PAYMENT_RECIPIENT: &str = "pay:null:xkIsxem0YNtHrRO";

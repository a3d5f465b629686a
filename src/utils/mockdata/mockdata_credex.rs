/// Credential request as it arrives from a Holder replying to an offer sent
/// under thread id `testid` (the fixed message id used in tests).
pub const ARIES_CREDENTIAL_REQUEST: &str = r#"
{
    "@id": "6b5fd8d2-c7f6-4c77-8fb0-d0e951a225e8",
    "@type": "https://didcomm.org/issue-credential/1.0/request-credential",
    "requests~attach": [
        {
            "@id": "libindy-cred-request-0",
            "mime-type": "application/json",
            "data": {
                "base64": "eyJwcm92ZXJfZGlkIjoiVnNLVjdnclIxQlVFMjltRzJGbTJrWCIsImNyZWRfZGVmX2lkIjoiTmNZeGlEWGtwWWk2b3Y1RmNZRGkxZTozOkNMOk5jWXhpRFhrcFlpNm92NUZjWURpMWU6MjpndnQ6MS4wOlRBRzEifQ=="
            }
        }
    ],
    "~thread": {
        "thid": "testid"
    }
}"#;

/// A message of a family the issuance exchange does not consume.
pub const ARIES_CONNECTION_ACK: &str = r#"
{
    "@id": "680e90b0-4a01-4dc7-8a1d-e54b43ebcc28",
    "@type": "https://didcomm.org/notification/1.0/ack",
    "status": "OK",
    "~thread": {
        "thid": "ecb40atx-4a01-4dc7-8a1d-e54b43dcebae"
    }
}"#;

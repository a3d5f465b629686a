use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct Timing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_time: Option<DateTime<Utc>>,
}

impl Timing {
    pub fn out_now() -> Timing {
        Timing {
            out_time: Some(Utc::now()),
        }
    }
}

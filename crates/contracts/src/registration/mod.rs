//! Registration contract shared by the page script and the server.

pub mod query;
pub mod submission;

pub use query::{invite_from_query, QueryParams};
pub use submission::{invite_wire_value, FieldValue, FormSubmission};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Endpoint the registration form is posted to.
pub const REGISTER_PATH: &str = "/api/register";

/// Id of the form element the page script intercepts.
pub const FORM_ID: &str = "userForm";

/// Query parameter carrying the invite code.
pub const INVITE_QUERY_KEY: &str = "c";

/// Form field the invite code is written to.
pub const INVITE_FIELD: &str = "invite";

/// Server acknowledgement of a received registration.
///
/// The page script never reads it; it exists for other API clients and logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationAck {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    /// Number of entries in the submission, `invite` included.
    pub fields: usize,
    pub invite: Option<String>,
}

impl RegistrationAck {
    pub fn for_submission(submission: &FormSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            fields: submission.len(),
            invite: submission.invite().map(str::to_owned),
        }
    }
}

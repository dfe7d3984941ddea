use serde::{Deserialize, Serialize};

/// Identity returned by `/api/auth/me`. Extra fields from the backend are ignored.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Identity {
    /// Only an active admin account may edit content.
    pub fn can_edit(&self) -> bool {
        self.is_admin && self.is_active
    }
}

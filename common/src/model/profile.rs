use serde::{Deserialize, Serialize};

/// User profile returned by `GET /user/profile/{id}`.
///
/// Used both to validate a stored session and to fill the Profile and
/// Edit Profile pages. Never cached across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

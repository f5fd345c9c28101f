use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Healer,
}

/// The signed-in user. There is no authentication; this is a fixed profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            id: "alex_thompson".to_string(),
            name: "Alex Thompson".to_string(),
            role: UserRole::User,
        }
    }
}

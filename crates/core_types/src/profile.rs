//! User profile wire types.

use serde::{Deserialize, Deserializer, Serialize};

/// Account role reported by the profile endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Grows and lists plants; unlocks "My Plants"
    Herbalist,
    /// Regular account
    User,
    /// Any role this dashboard doesn't know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// `null` and absent roles both read as [`Role::Unknown`].
    fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Role>::deserialize(deserializer).map(Option::unwrap_or_default)
    }

    /// Whether this role may manage its own plant listings.
    pub fn can_manage_plants(self) -> bool {
        matches!(self, Role::Herbalist)
    }
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name used in the greeting
    pub name: String,
    #[serde(default, deserialize_with = "Role::deserialize_nullable")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Who is looking at the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Viewer {
    /// No credential is stored
    Anonymous,
    /// Credential was accepted by the profile endpoint
    Member(UserProfile),
}

impl Viewer {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Member(profile) => Some(profile),
        }
    }
}

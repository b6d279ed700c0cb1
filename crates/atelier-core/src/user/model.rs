//! UserSession domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Artist,
    Client,
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "artist" => Ok(Self::Artist),
            "client" => Ok(Self::Client),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

/// The signed-in user.
///
/// Persisted under `atelier_user` so it survives restarts; cleared on logout.
/// `profile_id` links artists to their ArtistProfile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
}

impl UserSession {
    pub fn is_artist(&self) -> bool {
        self.user_type == UserType::Artist
    }
}

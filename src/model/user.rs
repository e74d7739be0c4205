use serde::{Deserialize, Serialize};

/// Access profile carried by user records, as wire integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum UserProfile {
    Administrator = 0,
    Operator = 1,
}

impl UserProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserProfile::Administrator => "Administrator",
            UserProfile::Operator => "Operator",
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile::Operator
    }
}

impl From<UserProfile> for i32 {
    fn from(profile: UserProfile) -> Self {
        profile as i32
    }
}

impl TryFrom<i32> for UserProfile {
    type Error = String;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(UserProfile::Administrator),
            1 => Ok(UserProfile::Operator),
            other => Err(format!("unknown user profile code: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Write-only: the backend never echoes passwords back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub profile: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_wire_codes() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"name":"Ana","login":"ana","profile":0}"#).unwrap();
        assert_eq!(user.profile, UserProfile::Administrator);
        let raw = serde_json::to_string(&user).unwrap();
        assert!(raw.contains(r#""profile":0"#));
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let parsed: Result<User, _> =
            serde_json::from_str(r#"{"id":1,"profile":9}"#);
        assert!(parsed.is_err());
    }
}

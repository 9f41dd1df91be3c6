use serde::{Deserialize, Serialize};

/// The `User` struct represents the resolved identity of the current
/// session, as returned by the Conduit API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct User {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// The API echoes the session token back on the user record.
    #[serde(default)]
    pub token: Option<String>,
}

impl User {
    /// Construct a new `User` with just the identifying fields.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            username: username.into(),
            email: email.into(),
            bio: None,
            image: None,
            token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that a user record deserializes from the wire shape the API
    /// uses, including absent optional fields.
    #[test]
    fn test_user_from_minimal_json() {
        let user: User =
            serde_json::from_str(r#"{"username": "jake", "email": "jake@jake.jake"}"#)
                .expect("user should deserialize");
        assert_eq!(user.username, "jake");
        assert_eq!(user.email, "jake@jake.jake");
        assert!(user.bio.is_none());
        assert!(user.token.is_none());
    }
}

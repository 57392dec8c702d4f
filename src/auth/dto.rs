use std::fmt;

use serde::{Deserialize, Serialize};

/// Login request body. The password is accepted and never inspected.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response returned by a login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub success: bool,
    pub token: String,
    pub refresh_token: String,
    pub expires_in: i64, // seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_password() {
        let creds = Credentials {
            username: "bob".into(),
            password: "hunter2".into(),
        };
        let out = format!("{creds:?}");
        assert!(out.contains("bob"));
        assert!(!out.contains("hunter2"));
    }

    #[test]
    fn auth_result_uses_camel_case_keys() {
        let res = AuthResult {
            success: true,
            token: "t".into(),
            refresh_token: "r".into(),
            expires_in: 86400,
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["refreshToken"], "r");
        assert_eq!(json["expiresIn"], 86400);
        assert_eq!(json["success"], true);
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two account roles. Stored as lowercase text on the user row and
/// carried in the token; every role-gated route checks against this enum
/// rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Professional,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professional => "professional",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "professional" => Ok(Role::Professional),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT payload used for authentication. Signed with HMAC, expires after the
/// configured TTL; there is no refresh token and no revocation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,  // user ID
    pub role: Role, // account role
    pub iat: usize, // issued at (unix timestamp)
    pub exp: usize, // expires at (unix timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Student).unwrap(), "\"student\"");
        assert_eq!(
            serde_json::to_string(&Role::Professional).unwrap(),
            "\"professional\""
        );
    }

    #[test]
    fn role_parses_from_stored_text() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!(
            "professional".parse::<Role>().unwrap(),
            Role::Professional
        );
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn claims_roundtrip_preserves_role() {
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::Professional,
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, claims.sub);
        assert_eq!(back.role, Role::Professional);
    }
}

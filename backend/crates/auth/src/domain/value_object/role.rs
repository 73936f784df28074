use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller role, ordered from least to most privileged.
///
/// The set is closed: every account carries exactly one of these, and
/// route access is declared in terms of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum Role {
    #[default]
    User = 0,
    Editor = 1,
    Admin = 2,
}

impl Role {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            User => "user",
            Editor => "editor",
            Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_editor_or_higher(&self) -> bool {
        use Role::*;
        matches!(self, Editor | Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Decode a stored role id; `None` for values outside the closed set
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        use Role::*;
        match id {
            0 => Some(User),
            1 => Some(Editor),
            2 => Some(Admin),
            _ => None,
        }
    }

    /// Decode a role code; `None` for values outside the closed set
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use Role::*;
        match code {
            "user" => Some(User),
            "editor" => Some(Editor),
            "admin" => Some(Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_id() {
        assert_eq!(Role::from_id(0), Some(Role::User));
        assert_eq!(Role::from_id(1), Some(Role::Editor));
        assert_eq!(Role::from_id(2), Some(Role::Admin));
        assert_eq!(Role::from_id(3), None);
        assert_eq!(Role::from_id(-1), None);
    }

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code("user"), Some(Role::User));
        assert_eq!(Role::from_code("editor"), Some(Role::Editor));
        assert_eq!(Role::from_code("admin"), Some(Role::Admin));
        assert_eq!(Role::from_code("superuser"), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::User.to_string(), "user");
        assert_eq!(Role::Editor.to_string(), "editor");
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_role_checks() {
        assert!(!Role::User.is_editor_or_higher());
        assert!(Role::Editor.is_editor_or_higher());
        assert!(Role::Admin.is_editor_or_higher());
        assert!(!Role::User.is_admin());
        assert!(!Role::Editor.is_admin());
        assert!(Role::Admin.is_admin());
    }

    #[test]
    fn test_role_default_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_serde_codes() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let role: Role = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, Role::Editor);
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }
}

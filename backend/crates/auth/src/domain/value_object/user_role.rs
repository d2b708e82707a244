//! User Role Value Object
//!
//! The three privilege tiers, ordered: Participant < Editor < Admin.
//! Wire representation uses the exact strings `participant`, `editor`,
//! `admin`. An unauthenticated visitor has no role at all (see
//! `application::access_gate::Identity`).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(i16)]
pub enum UserRole {
    /// Read-only access to public content
    #[default]
    Participant = 0,
    /// Can create, edit and delete news
    Editor = 1,
    /// Full access: user management, feedback inbox
    Admin = 2,
}

impl UserRole {
    /// Storage id (SMALLINT column)
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Wire code, exactly as exposed over the API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Participant => "participant",
            UserRole::Editor => "editor",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_editor_or_higher(&self) -> bool {
        matches!(self, UserRole::Editor | UserRole::Admin)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Decode the storage id; unknown values are rejected, not defaulted
    #[inline]
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(UserRole::Participant),
            1 => Some(UserRole::Editor),
            2 => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Decode the wire code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "participant" => Some(UserRole::Participant),
            "editor" => Some(UserRole::Editor),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ordering() {
        assert!(UserRole::Participant < UserRole::Editor);
        assert!(UserRole::Editor < UserRole::Admin);
        assert!(UserRole::Admin >= UserRole::Editor);
        assert!(UserRole::Editor >= UserRole::Editor);
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(UserRole::Participant.code(), "participant");
        assert_eq!(UserRole::Editor.code(), "editor");
        assert_eq!(UserRole::Admin.code(), "admin");
    }

    #[test]
    fn test_role_from_code() {
        assert_eq!(UserRole::from_code("participant"), Some(UserRole::Participant));
        assert_eq!(UserRole::from_code("editor"), Some(UserRole::Editor));
        assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("superuser"), None);
        assert_eq!(UserRole::from_code(""), None);
    }

    #[test]
    fn test_role_from_id() {
        assert_eq!(UserRole::from_id(0), Some(UserRole::Participant));
        assert_eq!(UserRole::from_id(1), Some(UserRole::Editor));
        assert_eq!(UserRole::from_id(2), Some(UserRole::Admin));
        assert_eq!(UserRole::from_id(3), None);
        assert_eq!(UserRole::from_id(-1), None);
    }

    #[test]
    fn test_role_default_is_participant() {
        assert_eq!(UserRole::default(), UserRole::Participant);
    }

    #[test]
    fn test_role_checks() {
        assert!(!UserRole::Participant.is_editor_or_higher());
        assert!(UserRole::Editor.is_editor_or_higher());
        assert!(UserRole::Admin.is_editor_or_higher());
        assert!(!UserRole::Participant.is_admin());
        assert!(!UserRole::Editor.is_admin());
        assert!(UserRole::Admin.is_admin());
    }
}

use std::fmt;

use serde::Serialize;

use crate::config::UserConfig;

/// Realm tag used for the logged-out portico pages.
pub const PORTICO_REALM: &str = "www";

/// Realm tag used for the realm with the empty reporting key.
pub const ROOT_REALM: &str = "(root)";

/// The role of a user within their organization.
///
/// Roles are mutually exclusive for reporting purposes even though the
/// underlying flags are not: a user with several flags set reports as the
/// most privileged role that applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Role {
    /// Owns the organization.
    Owner,
    /// Administers the organization.
    Admin,
    /// Moderates the organization.
    Moderator,
    /// A guest account with restricted access.
    Guest,
    /// An anonymous spectator of public channels.
    Spectator,
    /// A regular organization member.
    Member,
    /// No active session.
    LoggedOut,
}

/// The role decision table, ordered by precedence.
///
/// Evaluated top to bottom, first match wins. [`Role::LoggedOut`] is the
/// fallback when no predicate matches.
const ROLE_RULES: &[(fn(&UserConfig) -> bool, Role)] = &[
    (|user| user.is_owner, Role::Owner),
    (|user| user.is_admin, Role::Admin),
    (|user| user.is_moderator, Role::Moderator),
    (|user| user.is_guest, Role::Guest),
    (|user| user.is_spectator, Role::Spectator),
    (|user| user.id.is_some(), Role::Member),
];

impl Role {
    /// Derives the reported role from the session's user attributes.
    pub fn derive(user: &UserConfig) -> Self {
        ROLE_RULES
            .iter()
            .find(|(applies, _)| applies(user))
            .map_or(Role::LoggedOut, |&(_, role)| role)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Owner => "Organization owner",
            Role::Admin => "Organization administrator",
            Role::Moderator => "Moderator",
            Role::Guest => "Guest",
            Role::Spectator => "Spectator",
            Role::Member => "Member",
            Role::LoggedOut => "Logged out",
        };
        f.write_str(label)
    }
}

/// The identity record attached to the reporting scope at initialization.
///
/// Computed once from the bootstrap payload and immutable for the lifetime
/// of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserTag {
    /// Decimal user id, when a user is logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The realm tag, always present.
    pub realm: String,

    /// The reported role label, absent on the portico surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;

    use super::*;

    fn user(configure: impl FnOnce(&mut UserConfig)) -> UserConfig {
        let mut user = UserConfig::default();
        configure(&mut user);
        user
    }

    #[test]
    fn test_role_precedence() {
        // Each tier beats every tier below it, regardless of other flags.
        let all = user(|u| {
            u.id = Some(1);
            u.is_owner = true;
            u.is_admin = true;
            u.is_moderator = true;
            u.is_guest = true;
            u.is_spectator = true;
        });
        assert_eq!(Role::derive(&all), Role::Owner);

        let mut remaining = all;
        remaining.is_owner = false;
        assert_eq!(Role::derive(&remaining), Role::Admin);

        remaining.is_admin = false;
        assert_eq!(Role::derive(&remaining), Role::Moderator);

        remaining.is_moderator = false;
        assert_eq!(Role::derive(&remaining), Role::Guest);

        remaining.is_guest = false;
        assert_eq!(Role::derive(&remaining), Role::Spectator);

        remaining.is_spectator = false;
        assert_eq!(Role::derive(&remaining), Role::Member);

        remaining.id = None;
        assert_eq!(Role::derive(&remaining), Role::LoggedOut);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Owner.to_string(), "Organization owner");
        assert_eq!(Role::Admin.to_string(), "Organization administrator");
        assert_eq!(Role::LoggedOut.to_string(), "Logged out");
    }

    #[test]
    fn test_user_tag_serialization_skips_absent_fields() {
        let tag = UserTag {
            id: None,
            realm: "www".to_owned(),
            role: None,
        };
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            serde_json::json!({"realm": "www"})
        );
    }
}

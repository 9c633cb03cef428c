use sentry_types::Dsn;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::user::{Role, UserTag, PORTICO_REALM, ROOT_REALM};

/// Environment name used when the server does not supply one.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// An error parsing the bootstrap payload.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The payload was not valid JSON or did not match the schema.
    #[error("invalid monitoring bootstrap payload")]
    Parse(#[from] serde_json::Error),
}

/// The monitoring bootstrap payload handed over by the server.
///
/// Every field is optional with a documented default, so a page rendered
/// without monitoring configuration deserializes to a config that keeps
/// reporting disabled.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// The DSN to report to. Reporting is disabled without one.
    pub dsn: Option<Dsn>,

    /// Environment name for reported events. Defaults to `"development"`.
    pub environment: Option<String>,

    /// Release identifier of the running server build.
    pub release: Option<String>,

    /// Sample rate for error events in `[0, 1]`. Defaults to 0.
    pub sample_rate: f64,

    /// Base sample rate for performance traces in `[0, 1]`. Defaults to 0.
    pub trace_rate: f64,

    /// The realm this page is served for.
    pub realm: RealmConfig,

    /// The current user's session attributes.
    pub user: UserConfig,
}

impl MonitorConfig {
    /// Parses the bootstrap payload from its JSON representation.
    pub fn parse(payload: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Returns the environment name, falling back to [`DEFAULT_ENVIRONMENT`].
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Derives the immutable identity tag attached to the session scope.
    ///
    /// The realm tag is always present. Role and user id are only attached
    /// for pages served inside a realm; the portico surface carries no user
    /// identity.
    pub fn user_tag(&self) -> UserTag {
        let realm = self.realm.tag().to_owned();

        if self.realm.is_portico() {
            return UserTag {
                id: None,
                realm,
                role: None,
            };
        }

        UserTag {
            id: self.user.id.map(|id| id.to_string()),
            realm,
            role: Some(Role::derive(&self.user).to_string()),
        }
    }
}

/// Realm attributes of the current page.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmConfig {
    /// The realm's reporting key.
    ///
    /// Absent on the portico pages; the empty string names the root realm.
    pub key: Option<String>,

    /// The realm's base URL, used to scope reported frames to own assets.
    pub url: Option<Url>,

    /// Version of the server hosting the realm.
    pub server_version: Option<String>,
}

impl RealmConfig {
    /// Returns `true` if this page is served from the logged-out surface.
    pub fn is_portico(&self) -> bool {
        self.key.is_none()
    }

    /// Returns the realm tag for grouping.
    pub fn tag(&self) -> &str {
        match self.key.as_deref() {
            None => PORTICO_REALM,
            Some("") => ROOT_REALM,
            Some(key) => key,
        }
    }
}

/// Session attributes of the current user.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// The user's numeric id, absent for logged-out sessions.
    pub id: Option<u64>,

    /// Set if the user owns the organization.
    pub is_owner: bool,

    /// Set if the user administers the organization.
    pub is_admin: bool,

    /// Set if the user moderates the organization.
    pub is_moderator: bool,

    /// Set for guest accounts with restricted access.
    pub is_guest: bool,

    /// Set for anonymous spectators of public channels.
    pub is_spectator: bool,
}

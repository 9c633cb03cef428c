use beacon_config::{MonitorConfig, UserTag, PORTICO_REALM};
use beacon_sampling::TraceRates;
use sentry::types::Dsn;
use url::Url;

/// Path the browser SDK posts envelopes to instead of the DSN host.
///
/// Reports are proxied through the serving host so that ad blockers do not
/// drop them. The path is forwarded verbatim to the SDK.
pub const TUNNEL_PATH: &str = "/error_tracing";

/// Scope tag value reported for sessions without a derived role.
const BROWSER_ROLE: &str = "Browser";

/// The fully resolved monitoring options.
///
/// Produced once at startup by [`MonitorOptions::resolve`] from the bootstrap
/// payload and immutable afterwards. Resolution fills in every documented
/// default, so consumers never fall back on their own.
#[derive(Clone, Debug)]
pub struct MonitorOptions {
    /// The DSN to report to.
    pub dsn: Dsn,

    /// The environment name, `"development"` unless configured.
    pub environment: String,

    /// The reporting tunnel path, [`TUNNEL_PATH`].
    pub tunnel: String,

    /// Release identifier of the server build, when known.
    pub release: Option<String>,

    /// Anchored regex patterns of URLs reports may originate from.
    ///
    /// Covers the bare root path, the directory of the own script bundle and
    /// the realm's base URL. Frames from third-party extensions fall outside
    /// all three.
    pub allow_urls: Vec<String>,

    /// Sample rate for error events.
    pub sample_rate: f64,

    /// Base rate and per-operation multipliers for performance traces.
    pub trace_rates: TraceRates,

    /// The immutable per-session identity.
    pub user: UserTag,

    /// Tags seeded into the initial scope.
    pub tags: Vec<(String, String)>,
}

impl MonitorOptions {
    /// Resolves options from the bootstrap payload.
    ///
    /// Returns `None` when no DSN is configured; reporting stays disabled for
    /// the lifetime of the page in that case. `script_url` is the URL of the
    /// running script bundle, when the host can determine it.
    pub fn resolve(config: &MonitorConfig, script_url: Option<&Url>) -> Option<Self> {
        let dsn = config.dsn.clone()?;
        let user = config.user_tag();

        let mut allow_urls = vec!["^/".to_owned()];
        if let Some(script_dir) = script_url.and_then(|url| url.join(".").ok()) {
            allow_urls.push(format!("^{}", regex::escape(script_dir.as_str())));
        }
        if let Some(realm_url) = &config.realm.url {
            let base = realm_url.as_str().trim_end_matches('/');
            allow_urls.push(format!("^{}/", regex::escape(base)));
        }

        let mut tags = vec![
            ("realm".to_owned(), user.realm.clone()),
            (
                "user_role".to_owned(),
                user.role.clone().unwrap_or_else(|| BROWSER_ROLE.to_owned()),
            ),
        ];
        if let Some(version) = &config.realm.server_version {
            tags.push(("server_version".to_owned(), version.clone()));
        }

        Some(Self {
            dsn,
            environment: config.environment().to_owned(),
            tunnel: TUNNEL_PATH.to_owned(),
            release: config.release.clone(),
            allow_urls,
            sample_rate: config.sample_rate,
            trace_rates: TraceRates::with_web_defaults(config.trace_rate),
            user,
            tags,
        })
    }

    /// Returns `true` if the page is served from the logged-out surface.
    pub fn is_portico(&self) -> bool {
        self.user.realm == PORTICO_REALM
    }
}

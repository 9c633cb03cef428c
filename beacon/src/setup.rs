use std::sync::Arc;

use beacon_config::MonitorConfig;
use beacon_sampling::TraceRates;
use url::Url;

use crate::options::MonitorOptions;

/// The monitoring state of this process.
///
/// Resolved exactly once at startup by [`init`] and handed to the boundary
/// code that needs it. There is no re-initialization and no teardown.
#[derive(Clone, Debug)]
pub enum Monitor {
    /// A DSN is configured and reporting is active.
    Reporting(MonitorOptions),

    /// No DSN is configured; the SDK is initialized with a disabled client.
    Disabled,
}

impl Monitor {
    /// Returns `true` if reporting is active.
    pub fn is_reporting(&self) -> bool {
        matches!(self, Monitor::Reporting(_))
    }
}

/// Initializes monitoring from the bootstrap payload.
///
/// With a DSN, the SDK is initialized once with the resolved options: the
/// environment, release, allow-list, error sample rate, the per-operation
/// traces sampler and the session identity on the initial scope.
///
/// Without a DSN, a disabled client is installed instead. Code paths that
/// unconditionally start spans keep working either way; nothing leaves the
/// process.
pub fn init(config: &MonitorConfig, script_url: Option<&Url>) -> Monitor {
    match MonitorOptions::resolve(config, script_url) {
        Some(options) => {
            init_reporting(&options);
            beacon_log::info!(
                realm = options.user.realm.as_str(),
                environment = options.environment.as_str(),
                "error reporting enabled"
            );
            Monitor::Reporting(options)
        }
        None => {
            let guard = sentry::init(sentry::ClientOptions::default());
            std::mem::forget(guard);
            beacon_log::debug!("no DSN configured, error reporting disabled");
            Monitor::Disabled
        }
    }
}

fn init_reporting(options: &MonitorOptions) {
    let guard = sentry::init(sentry::ClientOptions {
        dsn: Some(options.dsn.clone()),
        environment: Some(options.environment.clone().into()),
        release: options.release.clone().map(Into::into),
        sample_rate: options.sample_rate as f32,
        traces_sampler: Some(Arc::new(traces_sampler(options.trace_rates.clone()))),
        ..Default::default()
    });

    // Keep the client for the process lifetime; there is no orderly shutdown
    // on a page, flushing happens on the SDK's transport.
    std::mem::forget(guard);

    let user = &options.user;
    let mut sentry_user = sentry::User {
        id: user.id.clone(),
        ..Default::default()
    };
    sentry_user
        .other
        .insert("realm".to_owned(), user.realm.clone().into());
    if let Some(role) = &user.role {
        sentry_user
            .other
            .insert("role".to_owned(), role.clone().into());
    }

    sentry::configure_scope(|scope| {
        for (key, value) in &options.tags {
            scope.set_tag(key, value);
        }
        scope.set_user(Some(sentry_user));
    });
}

/// Builds the traces sampler callback from the resolved rates.
///
/// The final probability for an operation is the base rate scaled by the
/// operation's table multiplier; operations without an override trace at the
/// full base rate.
fn traces_sampler(
    rates: TraceRates,
) -> impl Fn(&sentry::TransactionContext) -> f32 + Send + Sync + 'static {
    move |ctx| rates.sample_rate(ctx.name()) as f32
}

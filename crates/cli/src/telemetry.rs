//! Logging and error reporting setup.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log filter (default: `stockdesk=info`)
//! - `STOCKDESK_LOG_JSON` - Emit JSON lines instead of text when set
//! - `SENTRY_DSN` - Sentry DSN; reporting is off when unset
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Target prefix match, so this covers every `stockdesk_*` crate.
const DEFAULT_FILTER: &str = "stockdesk=info";

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
pub fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = env("SENTRY_DSN")?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: env("SENTRY_ENVIRONMENT").map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    guard.is_enabled().then_some(guard)
}

fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    event_filter_for(*metadata.level())
}

/// Only errors become Sentry events. Warnings such as stock alerts are
/// report output, so they ride along as breadcrumbs with info and debug.
fn event_filter_for(level: tracing::Level) -> sentry_tracing::EventFilter {
    match level {
        tracing::Level::ERROR => sentry_tracing::EventFilter::Event,
        tracing::Level::WARN | tracing::Level::INFO | tracing::Level::DEBUG => {
            sentry_tracing::EventFilter::Breadcrumb
        }
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the global tracing subscriber.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let json = env("STOCKDESK_LOG_JSON").is_some();
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

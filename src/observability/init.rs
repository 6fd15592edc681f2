//! Subscriber setup: `tracing` spans flow through the OpenTelemetry layer into
//! the rotating OTLP file.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::tracer_provider;
use super::otlp::SCOPE_NAME;
use super::rotation::RotationPolicy;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "zatlas-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// The filter comes from `trace_level`, falling back to `info` when unset or
/// unparsable. Tracing stays off if the data directory cannot be created, and
/// repeated calls leave the first subscriber in place.
pub fn init_tracing(config: &Config) {
    let filter = env_filter(config.trace_level.as_deref());

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SCOPE_NAME)]);
    let provider = tracer_provider(
        data_dir.join(TRACE_FILE_NAME),
        RotationPolicy::default(),
        resource,
    );

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)))
        .try_init();
}

fn env_filter(level: Option<&str>) -> EnvFilter {
    level
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

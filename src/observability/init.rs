//! Subscriber setup: `tracing` macros → OpenTelemetry → OTLP JSON file.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name reported on every span.
pub const SERVICE_NAME: &str = "interest-form";

/// Installs the global subscriber.
///
/// The filter comes from `config.trace_level`; an unparsable directive falls
/// back to [`crate::DEFAULT_TRACE_LEVEL`]. Tracing is optional: if the data
/// directory cannot be created the plugin simply runs without it. Calling
/// this more than once keeps the first subscriber.
pub fn init_tracing(config: &Config) {
    let Some(trace_dir) = paths::trace_file().parent().map(ToOwned::to_owned) else {
        return;
    };
    if std::fs::create_dir_all(&trace_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level)
        .unwrap_or_else(|_| EnvFilter::new(crate::DEFAULT_TRACE_LEVEL));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(paths::trace_file(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}

//! Tracing subscriber setup.

use super::exporter;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported span.
pub const SERVICE_NAME: &str = "testimonial-carousel";

/// File name of the live trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "carousel-otlp.json";

/// Installs the global subscriber: an `EnvFilter` at `config.trace_level`
/// (default `info`) feeding an OpenTelemetry layer that exports to
/// `<data dir>/carousel-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without a subscriber. Only the first successful call takes
/// effect.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let tracer = provider.tracer(exporter::SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}

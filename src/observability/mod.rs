//! OpenTelemetry-based observability with file-based trace export.
//!
//! `tracing` spans and events from the whole crate flow through an
//! OpenTelemetry layer into a custom exporter that appends OTLP JSON to a
//! rotating file, for offline analysis of a plugin that has no network.
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingFile
//! ```
//!
//! # Configuration
//!
//! The filter comes from the `trace_level` plugin option, written in
//! `EnvFilter` syntax (`debug`, `testimonial_carousel::carousel=trace`).
//! Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and OTLP JSON formatting
//! - [`rotating`]: Size-rotated trace file with timestamped backups

pub mod exporter;
pub mod init;
pub mod rotating;

pub use init::init_tracing;

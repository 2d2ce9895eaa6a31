//! File-based OpenTelemetry tracing.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter
//!                                                                  │
//!             /host/.local/share/zellij/interest-form/interest-form-otlp.json
//! ```
//!
//! The file rotates at 10 MB and keeps three numbered backups. Spans never
//! carry field values of the PIN; handlers record lengths only.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, SERVICE_NAME};

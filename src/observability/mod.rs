//! OpenTelemetry tracing exported to a local file.
//!
//! The plugin runs in Zellij's WASI sandbox, where there is no collector to talk
//! to. Spans are instead serialized as OTLP JSON, one batch per line, into a file
//! under the plugin's data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → TracerProvider → FileSpanExporter → RotatingFile
//! ```
//!
//! The file is `/host/.local/share/zellij/bookshelf/bookshelf-otlp.json`. It is
//! rotated once it passes 5 MB and the three newest backups are kept.
//!
//! The level comes from the `trace_level` plugin option (an `EnvFilter`
//! directive, `"info"` when unset).
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: `SpanExporter` implementation and OTLP JSON encoding
//! - [`rotating_file`]: Size-based rotating writer

mod exporter;
mod init;
mod rotating_file;

pub use init::init_tracing;

//! File-based OpenTelemetry tracing.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → OtlpFileExporter → zatlas-otlp.json
//! ```
//!
//! Spans are encoded as OTLP JSON, one batch per line, into
//! `~/.local/share/zellij/zatlas/zatlas-otlp.json`. The file rotates at
//! 10 MB and keeps three numbered backups. The filter level comes from the
//! `trace_level` plugin option and defaults to `info`.

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use exporter::{tracer_provider, OtlpFileExporter};
pub use init::{init_tracing, TRACE_FILE_NAME};
pub use rotation::{RotatingWriter, RotationPolicy};

//! File-backed `SpanExporter` and the provider that drives it.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};

use super::otlp;
use super::rotation::{RotatingWriter, RotationPolicy};

/// Writes each batch as one OTLP JSON line into a rotating file.
#[derive(Debug)]
pub struct OtlpFileExporter {
    writer: RotatingWriter,
    resource: Resource,
    shut_down: AtomicBool,
}

impl OtlpFileExporter {
    pub const fn new(path: PathBuf, policy: RotationPolicy, resource: Resource) -> Self {
        Self {
            writer: RotatingWriter::new(path, policy),
            resource,
            shut_down: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.shut_down.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        let line = otlp::encode_batch(&self.resource, batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for OtlpFileExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every span synchronously to `path`.
///
/// The simple processor is used because the plugin runs single-threaded
/// inside wasm with no async runtime to drive a batch processor.
pub fn tracer_provider(path: PathBuf, policy: RotationPolicy, resource: Resource) -> TracerProvider {
    let exporter = OtlpFileExporter::new(path, policy, resource.clone());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

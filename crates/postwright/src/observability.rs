//! Span export through OpenTelemetry.
//!
//! Spans from the pipeline and the Gemini client go to a stdout exporter.
//! Logs still go to stderr, as text or JSON lines.

use crate::logging::env_filter;
use opentelemetry::{KeyValue, global, trace::TracerProvider};
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use postwright_error::PostwrightResult;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How the binary reports spans and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Name spans are attributed to
    pub service_name: String,
    /// Filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// One JSON object per log line instead of text
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Text logs at `info` for the named service.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the log and span layers as the global subscriber.
///
/// Pass the returned provider to [`shutdown_observability`] before exit so
/// buffered spans are flushed.
///
/// # Errors
///
/// Fails when neither `RUST_LOG` nor the configured level is a valid filter.
/// Nothing is installed in that case.
pub fn init_observability(config: ObservabilityConfig) -> PostwrightResult<SdkTracerProvider> {
    let env_filter = env_filter(&config.log_level)?;

    let provider = tracer_provider(&config.service_name);
    global::set_tracer_provider(provider.clone());
    let tracer = provider.tracer(config.service_name);
    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);
    let fmt_layer = if config.json_logs {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(otel_layer)
        .init();

    Ok(provider)
}

fn tracer_provider(service_name: &str) -> SdkTracerProvider {
    let version = KeyValue::new("service.version", env!("CARGO_PKG_VERSION"));
    let resource = Resource::builder()
        .with_service_name(service_name.to_string())
        .with_attributes([version])
        .build();

    SdkTracerProvider::builder()
        .with_simple_exporter(SpanExporter::default())
        .with_resource(resource)
        .build()
}

/// Flush and shut down the tracer provider.
pub fn shutdown_observability(provider: SdkTracerProvider) {
    if let Err(e) = provider.shutdown() {
        eprintln!("Failed to shut down tracer provider: {e}");
    }
}

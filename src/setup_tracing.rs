use opentelemetry::sdk::{trace as sdktrace, Resource};
use opentelemetry::trace::TraceError;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
use std::env;
use std::str::FromStr;
use tonic::metadata::{Ascii, MetadataKey, MetadataMap, MetadataValue};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use crate::app_error::AppResult;

const HEADER_PREFIX: &str = "OTEL_METADATA_";
const OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

// OTEL_METADATA_X_HONEYCOMB_TEAM=<key> becomes the `x-honeycomb-team` header
fn otlp_metadata() -> MetadataMap {
    let mut metadata = MetadataMap::new();
    for (name, value) in env::vars() {
        let header_name = match name.strip_prefix(HEADER_PREFIX) {
            Some(header_name) => header_name.replace('_', "-").to_ascii_lowercase(),
            None => continue,
        };
        let key = MetadataKey::<Ascii>::from_str(&header_name);
        let value = value.parse::<MetadataValue<Ascii>>();
        if let (Ok(key), Ok(value)) = (key, value) {
            metadata.insert(key, value);
        }
    }
    metadata
}

fn init_opentelemetry() -> Result<sdktrace::Tracer, TraceError> {
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_env()
        .with_metadata(otlp_metadata());

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(
            sdktrace::config().with_resource(Resource::new(vec![SERVICE_NAME.string("mp3-drop")])),
        )
        .install_batch(opentelemetry::runtime::Tokio)
}

/// Logs to stdout, and additionally exports spans over OTLP when
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
pub fn setup_tracing(level: LevelFilter) -> AppResult<()> {
    let telemetry_layer = match env::var(OTLP_ENDPOINT) {
        Ok(_) => Some(tracing_opentelemetry::layer().with_tracer(init_opentelemetry()?)),
        Err(_) => None,
    };

    // NOTE: the underlying subscriber MUST be the Registry subscriber
    let subscriber = Registry::default()
        .with(level)
        .with(tracing_subscriber::fmt::Layer::default())
        .with(telemetry_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

pub fn shutdown_tracing() {
    opentelemetry::global::shutdown_tracer_provider();
}

//! Logging subscriber initialisation.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{
    ServerConfig,
    observability::{LogFormat, LoggingConfig},
};

use super::ObservabilityError;

const NOISY_DEPENDENCIES: &str = "h2=warn,hyper=warn,tower=warn,tonic=warn,opentelemetry=warn,sqlx=warn";

pub(super) fn init_subscriber(
    config: &ServerConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let otel_layer = tracer_provider.map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer(config.observability.otel_service_name.clone()))
    });

    let subscriber = tracing_subscriber::registry()
        .with(otel_layer)
        .with(build_env_filter(&config.logging));

    match config.logging.log_format {
        LogFormat::Compact => subscriber
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()?,
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true),
            )
            .try_init()?,
    }

    Ok(())
}

fn build_env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},{NOISY_DEPENDENCIES}", logging.log_level)))
}

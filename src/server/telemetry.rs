use crate::config::Config;
use opentelemetry::sdk::propagation::TraceContextPropagator;
use opentelemetry::sdk::{
    trace::{self, RandomIdGenerator, Sampler},
    Resource,
};
use opentelemetry::{global, KeyValue};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "activity_board=debug,tower_http=debug,axum::rejection=trace,warn";

pub fn init_telemetry(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_file(true)
        .with_ansi(true)
        .json();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if config.enable_telemetry {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let tracer = opentelemetry_jaeger::new_collector_pipeline()
            .with_service_name(env!("CARGO_PKG_NAME"))
            .with_endpoint(&config.jaeger_endpoint)
            .with_isahc()
            .with_trace_config(
                trace::config()
                    .with_sampler(Sampler::AlwaysOn)
                    .with_id_generator(RandomIdGenerator::default())
                    .with_max_events_per_span(64)
                    .with_max_attributes_per_span(16)
                    .with_resource(Resource::new(vec![
                        KeyValue::new("service.name", env!("CARGO_PKG_NAME")),
                        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
                    ])),
            )
            .with_timeout(std::time::Duration::from_secs(2))
            .install_batch(opentelemetry::runtime::Tokio)?;

        let telemetry = tracing_opentelemetry::layer().with_tracer(tracer);

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .with(telemetry)
            .try_init()?;

        tracing::info!(endpoint = %config.jaeger_endpoint, "Telemetry initialized");
    } else {
        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        tracing::info!("Telemetry disabled");
    }

    Ok(())
}

/// Flushes pending spans. A no-op unless telemetry was enabled.
pub fn shutdown_telemetry(config: &Config) {
    if config.enable_telemetry {
        global::shutdown_tracer_provider();
    }
}

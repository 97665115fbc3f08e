use thiserror::Error;
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt};

#[derive(Debug, Error)]
pub enum TracerError {
    #[error("Global Subscriber Already Set: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub struct TracerOptions {
    /// Level used when `RUST_LOG` is not set.
    pub default_level: LevelFilter,
}

impl TracerOptions {
    pub fn new(default_level: LevelFilter) -> Self {
        Self { default_level }
    }
}

/// This object initialises the stderr tracer, given a TracerOptions struct.
pub struct TracerEngine {
    service_name: String,
}

impl TracerEngine {
    /// Initialises the stderr tracer for the crate
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the binary that owns the subscriber.
    /// #Returns
    /// An instance of TracerEngine, or an error if a global subscriber already exists.
    pub fn new(options: TracerOptions, service_name: &str) -> Result<Self, TracerError> {
        // stdout is reserved for transformed output
        let fmt_tracer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        // This filter is applied to the fmt tracer
        let log_filter = EnvFilter::builder()
            .with_default_directive(options.default_level.into())
            .from_env_lossy();

        let subscriber =
            tracing_subscriber::Registry::default().with(fmt_tracer.with_filter(log_filter));

        tracing::subscriber::set_global_default(subscriber)?;
        debug!("Tracer initialised for {service_name}");

        Ok(Self {
            service_name: service_name.to_owned(),
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

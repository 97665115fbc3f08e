mod loader;
mod parameters;
mod processing;

use anyhow::Result;
use clap::Parser;
use gmprocess_common::{
    init_tracer,
    metrics::{component_info_metric, describe_transform_metrics},
};
use metrics_exporter_prometheus::PrometheusBuilder;
use parameters::Mode;
use std::{net::SocketAddr, path::PathBuf};
use tracing::{info, level_filters::LevelFilter};

// cargo run --bin gm-transform -- --input streams.json --output response.json oscillator --damping 0.05 --period 1.0

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// JSON document holding a stream or a list of streams; stdin when absent.
    #[clap(long, env = "GM_TRANSFORM_INPUT")]
    input: Option<PathBuf>,

    /// Where to write the transformed streams; stdout when absent.
    #[clap(long, env = "GM_TRANSFORM_OUTPUT")]
    output: Option<PathBuf>,

    /// Size of the worker pool; defaults to the number of cores.
    #[clap(long, env = "GM_TRANSFORM_THREADS")]
    threads: Option<usize>,

    /// Skip streams that fail to transform instead of aborting.
    #[clap(long, default_value = "false")]
    keep_going: bool,

    /// Level used when RUST_LOG is not set.
    #[clap(long, env = "GM_TRANSFORM_LOG_LEVEL", default_value = "info")]
    log_level: LevelFilter,

    /// If set, Prometheus metrics are served on this address.
    #[clap(long, env)]
    observability_address: Option<SocketAddr>,

    #[command(subcommand)]
    mode: Mode,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let tracer = init_tracer!(args.log_level)?;
    info!("Starting {} {}", tracer.service_name(), args.mode.transform());

    if let Some(address) = args.observability_address {
        PrometheusBuilder::new()
            .with_http_listener(address)
            .install()?;
        info!("Serving metrics on {address}");
    }
    describe_transform_metrics();
    component_info_metric("gm-transform");

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let streams = loader::load_streams(args.input.as_deref())?;
    let transformed = processing::process(&streams, &args.mode, args.keep_going)?;
    loader::save_streams(args.output.as_deref(), &transformed)?;
    Ok(())
}

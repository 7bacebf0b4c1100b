use std::path::{Path, PathBuf};

use clap::Parser;

use counterstate::CounterState;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_bunyan_formatter::{JsonStorageLayer, BunyanFormattingLayer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of increments to apply to a fresh counter
    #[arg(short, long, default_value_t = 0)]
    increments: u64,
    /// Print the resulting snapshot as JSON
    #[arg(short, long)]
    json: bool,
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let _guard = init_tracing(&args.log_dir)?;

    let mut counter = CounterState::create();
    for _ in 0..args.increments {
        counter.increment_count();
    }

    let snapshot = counter.snapshot();
    if args.json {
        println!("{}", snapshot.to_json()?);
    } else {
        println!("currentCount: {}", snapshot.current_count);
    }

    Ok(())
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing(log_dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}

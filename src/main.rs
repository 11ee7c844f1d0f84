use ants::simulation::{
    colony::Colony, config::Config, control::Session, field::Field, scheduler::Scheduler,
};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Headless ant colony run.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Field width in cells.
    #[arg(long, default_value_t = 1024)]
    width: usize,

    /// Field height in cells.
    #[arg(long, default_value_t = 768)]
    height: usize,

    /// Number of ticks to run.
    #[arg(short, long, default_value_t = 1000)]
    ticks: u64,

    /// JSON config file. Missing fields take defaults.
    #[arg(short, long)]
    config: Option<String>,

    /// Start from a saved field instead of an empty one.
    #[arg(long)]
    load_field: Option<String>,

    /// Save the field here after the run.
    #[arg(long)]
    save_field: Option<String>,

    /// Save the whole colony here after the run.
    #[arg(long)]
    save_colony: Option<String>,

    /// Worker threads, defaults to one per core.
    #[arg(short, long)]
    workers: Option<usize>,

    /// Run both phases on the main thread.
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ants=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };
    if args.sequential {
        config.parallel = false;
    }

    let scheduler = match args.workers {
        Some(n) => Scheduler::with_workers(n)?,
        None => Scheduler::new()?,
    };

    let colony = match &args.load_field {
        Some(path) => Colony::with_field(Field::load_from_file(path)?, &config),
        None => Colony::new(args.width, args.height, &config)?,
    };

    tracing::info!(
        width = colony.field.width(),
        height = colony.field.height(),
        population = colony.population(),
        workers = scheduler.workers(),
        parallel = config.parallel,
        "starting colony"
    );

    let mut session = Session::new(colony, config, scheduler);
    for _ in 0..args.ticks {
        if session.advance().is_some_and(|report| report.population == 0) {
            tracing::warn!(tick = session.colony.tick, "colony died out");
            break;
        }
    }

    tracing::info!(
        tick = session.colony.tick,
        population = session.colony.population(),
        stockpile = session.colony.stockpile,
        "run finished"
    );

    if let Some(path) = &args.save_field {
        session.colony.field.save_to_file(path)?;
        tracing::info!(path, "saved field");
    }
    if let Some(path) = &args.save_colony {
        session.colony.save_to_file(path)?;
        tracing::info!(path, "saved colony");
    }
    Ok(())
}

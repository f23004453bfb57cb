//! `spot-route`: orders spots from a CSV file into a visiting route.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spot_routing::config::PlannerConfig;
use spot_routing::export::directions_url;
use spot_routing::loader::load_spots_file;
use spot_routing::models::{Coordinate, Route, TravelMode};
use spot_routing::ordering::Strategy;

/// Command-line arguments for `spot-route`.
#[derive(Debug, Parser)]
#[command(name = "spot-route")]
#[command(about = "Order spots into a visiting route from a start position")]
struct Cli {
    /// Start position as "lat,lon".
    #[arg(long)]
    from: Coordinate,

    /// CSV file with name,latitude,longitude[,wait_minutes][,visit_minutes].
    #[arg(long)]
    spots: PathBuf,

    /// exhaustive | nearest | rank (defaults to the configured strategy).
    #[arg(long)]
    strategy: Option<Strategy>,

    /// walking | driving (defaults to the configured mode).
    #[arg(long)]
    mode: Option<TravelMode>,

    /// TOML planner configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the route as JSON.
    #[arg(long)]
    json: bool,

    /// Also print a directions deep link.
    #[arg(long)]
    link: bool,

    #[arg(long, short, help = "Enable verbose output")]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "spot_routing=debug,spot_route=debug"
    } else {
        "spot_routing=info,spot_route=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_route(route: &Route) {
    println!(
        "{} stops, {:.2} km, {:.0} min ({})",
        route.len(),
        route.total_distance_km(),
        route.total_minutes(),
        route.mode()
    );
    for (n, leg) in route.legs().iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:>7.2} km {:>6.0} min",
            n + 1,
            leg.spot_name,
            leg.distance_km,
            leg.cumulative_minutes
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => PlannerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };
    let spots = load_spots_file(&cli.spots)
        .with_context(|| format!("loading spots {}", cli.spots.display()))?;

    let strategy = cli.strategy.unwrap_or(config.default_strategy);
    let mode = cli.mode.unwrap_or(config.default_mode);
    tracing::info!(%strategy, %mode, spots = spots.len(), "ordering spots");

    let route = strategy.order_with_cap(cli.from, &spots, config.travel(mode), config.exhaustive_cap())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_route(&route);
    }

    if cli.link {
        if route.is_empty() {
            tracing::warn!("no stops, skipping directions link");
        } else {
            println!("{}", directions_url(&route, &config.directions_base_url)?);
        }
    }

    Ok(())
}

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use trip_monitor::api_key::{DEFAULT_KEY_FILE, resolve_api_key};
use trip_monitor::logging::init_logging;
use trip_monitor::monitor::{
    DEFAULT_LOW_WATER_MARK, DEFAULT_MAX_PAGES, MAX_LINGER_MINS, MonitorConfig, TripMonitor,
};
use trip_monitor::resrobot::{ResRobotClient, ResRobotConfig};

#[derive(Parser)]
#[command(name = "trip-monitor")]
#[command(about = "Watch upcoming departures between two stops", long_about = None)]
struct Args {
    /// Origin stop name (partial names are matched, e.g. "Dalby Buss")
    origin: String,

    /// Destination stop name (e.g. "Lund Central")
    destination: String,

    /// Trafiklab ResRobot API key
    #[arg(short = 'k', long, env = "RESROBOT_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// File to read the API key from when none is given
    #[arg(long, default_value = DEFAULT_KEY_FILE)]
    key_file: PathBuf,

    /// Minutes needed to get to the stop; trips leaving sooner are ignored
    #[arg(
        long,
        default_value_t = 15,
        value_parser = clap::value_parser!(i64).range(0..=MAX_LINGER_MINS)
    )]
    linger: i64,

    /// Fetch more trips when fewer than this many are known
    #[arg(long, default_value_t = DEFAULT_LOW_WATER_MARK)]
    low_water: usize,

    /// Maximum result pages fetched per refresh
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Line to leave out of the results (repeatable)
    #[arg(short, long = "blacklist", value_name = "LINE")]
    blacklist: Vec<String>,

    /// Number of refreshes to run (0 runs until interrupted)
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Seconds to wait between refreshes
    #[arg(long, default_value_t = 60)]
    interval: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    let api_key = match resolve_api_key(args.api_key.as_deref(), &args.key_file) {
        Ok(key) => key,
        Err(e) => {
            error!(error = %e, "Please pass --api-key or create the key file");
            return ExitCode::FAILURE;
        }
    };

    let client = match ResRobotClient::new(ResRobotConfig::new(api_key)) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to create ResRobot client");
            return ExitCode::FAILURE;
        }
    };

    let config = MonitorConfig::new(args.linger)
        .with_low_water_mark(args.low_water)
        .with_max_pages(args.max_pages);
    let mut monitor = TripMonitor::new(config, client.clone(), client);

    if !monitor.add_route(&args.origin, &args.destination).await {
        return ExitCode::FAILURE;
    }

    for line in &args.blacklist {
        monitor.blacklist_line(line);
    }

    let mut round = 0;
    loop {
        info!("Refreshing");
        let report = monitor.refresh().await;
        info!(
            purged = report.purged,
            fetches = report.fetches,
            failures = report.fetch_failures,
            added = report.added,
            trips = monitor.trip_count(),
            "Refreshed"
        );
        monitor.log_dump();

        round += 1;
        if args.rounds != 0 && round >= args.rounds {
            break;
        }
        tokio::time::sleep(Duration::from_secs(args.interval)).await;
    }

    ExitCode::SUCCESS
}

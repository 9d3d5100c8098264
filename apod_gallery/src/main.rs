//! APOD Gallery - terminal front-end
//!
//! Fetches the APOD feed once and shows the images of a date range.
//! Runs a single query by default, or an interactive prompt with --interactive.

use apod_gallery::command::{parse_command, parse_date, Command, HELP};
use apod_gallery::config::{DEFAULT_FEED_URL, DEFAULT_RANGE_DAYS, DEFAULT_TIMEOUT_SECS};
use apod_gallery::render::render_update;
use apod_gallery::{DateRange, FeedCache, FeedClient, GalleryConfig, Intent, Session, ViewUpdate};
use chrono::NaiveDate;
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Browse the Astronomy Picture of the Day archive by date range
#[derive(Parser, Debug)]
#[command(name = "apod_gallery")]
#[command(version, about, long_about = None)]
struct Args {
    /// URL of the JSON feed
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// First day of the range (YYYY-MM-DD, default: 30 days ago)
    #[arg(short, long, value_parser = parse_date)]
    start: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD, default: today)
    #[arg(short, long, value_parser = parse_date)]
    end: Option<NaiveDate>,

    /// Open the detail view for this date after listing the range
    #[arg(long, value_parser = parse_date)]
    show: Option<NaiveDate>,

    /// Request timeout in seconds (at least 1)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Read commands from stdin instead of running a single query
    #[arg(short, long, default_value_t = false)]
    interactive: bool,
}

#[tokio::main]
async fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=apod_gallery=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = GalleryConfig {
        feed_url: args.feed_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
        ..GalleryConfig::default()
    };

    log::info!("Starting apod_gallery...");
    log::info!("Feed URL: {}", config.feed_url);

    let client = match FeedClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    let mut session = Session::new(FeedCache::new(client));

    if args.interactive {
        if let Err(e) = run_prompt(&mut session).await {
            log::error!("Failed to read from stdin: {}", e);
            std::process::exit(1);
        }
    } else if !run_once(&mut session, &args).await {
        std::process::exit(1);
    }
}

/// Run one range query (plus optional detail); returns false on alert or fetch error
async fn run_once(session: &mut Session, args: &Args) -> bool {
    let (start, end) = match (args.start, args.end) {
        (None, None) => {
            let today = chrono::Local::now().date_naive();
            let range = DateRange::last_days(today, DEFAULT_RANGE_DAYS);
            (Some(range.start()), Some(range.end()))
        }
        given => given,
    };

    let updates = session.dispatch(Intent::FetchRequested { start, end }).await;
    print_updates(&updates);

    if updates
        .iter()
        .any(|u| matches!(u, ViewUpdate::Alert(_) | ViewUpdate::Error(_)))
    {
        return false;
    }

    if let Some(date) = args.show {
        let updates = session.dispatch(Intent::ItemSelected { date }).await;
        if updates.is_empty() {
            println!("No entry for {} in the selected range.", date);
        }
        print_updates(&updates);
    }
    true
}

/// Interactive loop; every failure except stdin I/O leaves the prompt usable
async fn run_prompt(session: &mut Session) -> std::io::Result<()> {
    print!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Some(Command::Intent(intent))) => {
                let updates = session.dispatch(intent).await;
                print_updates(&updates);
            }
            Ok(Some(Command::Help)) => print!("{HELP}"),
            Ok(Some(Command::Quit)) => break,
            Ok(None) => {}
            Err(e) => println!("{e}"),
        }
    }

    log::info!("Session ended");
    Ok(())
}

fn print_updates(updates: &[ViewUpdate]) {
    for update in updates {
        print!("{}", render_update(update));
    }
}

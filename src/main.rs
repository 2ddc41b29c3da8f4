use clap::Parser;
use gov_announcements::crawlers::{Fetch, Throttle, Unthrottled};
use gov_announcements::{Announcements, Result, SiteConfig};

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    ::log::info!(
        "Reading {} search pages from {}",
        args.pages,
        config.search_url
    );

    let delay_ms = config.delay_ms;
    let announcements = match Announcements::new(config) {
        Ok(announcements) => announcements,
        Err(e) => {
            ::log::error!("Failed to start scraper: {}", e);
            std::process::exit(1);
        }
    };

    let start_time = std::time::Instant::now();
    let result = if delay_ms == 0 {
        run(&announcements.with_throttle(Unthrottled), &args).await
    } else {
        run(&announcements, &args).await
    };

    if let Err(e) = result {
        ::log::error!("Scrape failed: {}", e);
        std::process::exit(1);
    }

    ::log::info!(
        "Scraping complete in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

/// Read the configuration file, if any, and apply command-line overrides
fn load_config(args: &Args) -> Result<SiteConfig> {
    let mut config = match &args.config {
        Some(path) => SiteConfig::from_file(path)?,
        None => SiteConfig::default(),
    };

    if let Some(delay_ms) = args.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }

    Ok(config)
}

async fn run<F: Fetch, T: Throttle>(announcements: &Announcements<F, T>, args: &Args) -> Result<()> {
    if args.links_only {
        for link in announcements.fetch_all_links(args.pages).await? {
            println!("{}", link);
        }
        return Ok(());
    }

    // One JSON record per line
    for record in announcements.scrape(args.pages).await? {
        println!("{}", serde_json::to_string(&record)?);
    }

    Ok(())
}

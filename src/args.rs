use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gov-announcements")]
#[command(about = "Collects announcement links from paginated search results and extracts their text")]
#[command(version)]
pub struct Args {
    /// Number of search-results pages to read (pages 0 through N-1)
    #[arg(short, long, default_value_t = 1)]
    pub pages: usize,

    /// Path to a JSON site configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pause after every request, in milliseconds (overrides the configuration)
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    /// HTTP timeout in seconds (overrides the configuration)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Only print the collected links, one per line
    #[arg(long, default_value_t = false)]
    pub links_only: bool,
}

//! seo-audit CLI
//!
//! Quick checker for the basic SEO signals of a page: title, meta
//! description, H1, text volume, and server response time.

use anyhow::Result;
use clap::Parser;

mod audit;
mod fetch;
mod page;

use audit::run_audit;

#[derive(Parser)]
#[command(name = "seo-audit")]
#[command(version)]
#[command(about = "On-page SEO checks for a single URL")]
struct Cli {
    /// Page URL to audit (arguments past the first are ignored)
    #[arg(value_name = "URL")]
    urls: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.urls.first() {
        Some(url) => run_audit(url).await,
        None => {
            println!("Usage: seo-audit <URL>");
            Ok(())
        }
    }
}

//! lunch - Fetch today's school lunch menu
//!
//! Usage:
//!   lunch               Print today's entrees
//!
//! Configuration lives at ~/.lunch/config.json:
//!   { "school_id": "...", "grade": "..." }

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lunch::config::{config_path, LunchConfig};
use lunch::menu;

/// Fetch today's school lunch menu
#[derive(Parser)]
#[command(name = "lunch")]
#[command(about = "Fetch today's school lunch menu")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    let config = LunchConfig::load(&config_path())?;

    // Weekend guard fires before any network call
    let today = menu::school_day(Local::now().date_naive())?;
    let serving_date = menu::format_serving_date(today);
    let url = menu::menu_url(&config.school_id, &config.grade, &serving_date);
    tracing::debug!(%url, "menu lookup");

    println!("checking school lunch...");
    println!();

    let menu = menu::fetch_menu(&url)?;
    let entrees = menu::entrees(&menu);

    if entrees.is_empty() {
        println!("no entrees listed for today");
        return Ok(());
    }

    for entree in entrees {
        println!("{}", entree);
    }

    Ok(())
}

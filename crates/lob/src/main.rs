//! lob - Read the lobste.rs front page from the terminal
//!
//! Usage:
//!   lob                 List the newest stories
//!   lob --hot           List the hottest stories
//!
//! After the listing, one prompt accepts:
//!   open FRAGMENT       Open the matching story's URL in a browser
//!   FRAGMENT            Print the matching story's comment thread
//!   exit                Quit
//!
//! A fragment is a prefix of a story's title or short id.

use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use satchel_core::Paths;
use tracing_subscriber::EnvFilter;

use lob::feed::{self, Post};
use lob::matcher::find_single_match;
use lob::thread;

/// Read the lobste.rs front page, open a story or browse its comments
#[derive(Parser)]
#[command(name = "lob")]
#[command(about = "Read the lobste.rs front page from the terminal")]
#[command(version)]
struct Cli {
    /// Fetch the hottest stories instead of the newest
    #[arg(long)]
    hot: bool,
}

#[cfg(target_os = "macos")]
const OPENER: &str = "open";
#[cfg(not(target_os = "macos"))]
const OPENER: &str = "xdg-open";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let posts = feed::fetch_posts(cli.hot)?;
    tracing::debug!(count = posts.len(), hot = cli.hot, "fetched front page");

    for post in &posts {
        print_post(post);
    }

    println!(
        "type 'open <id>' to open the url in a browser, the <id> to see the post's comments, or 'exit' to quit."
    );
    println!("(you can enter a fragment of a post's title instead of the id)");

    let input = match read_choice()? {
        Some(line) => line,
        None => return Ok(()),
    };

    if input.is_empty() || input == "exit" || input == "quit" || input == "q" {
        return Ok(());
    }

    if input == "open" {
        bail!("to open a url in a browser, format as 'open s2zxwx' or 'open <fragment of the title>'");
    }
    if let Some(fragment) = input.strip_prefix("open ") {
        let post = find_single_match(fragment.trim(), &posts)?;
        return open_in_browser(&post.url);
    }

    let post = find_single_match(&input, &posts)?;
    if post.comment_count == 0 {
        bail!("'{}' has no comments", post.title);
    }

    let comments = feed::fetch_comments(&post.short_id)?;
    for (depth, body) in thread::layout(&comments)? {
        println!();
        println!("{}", thread::format_line(depth, &body));
    }

    Ok(())
}

/// Print one story as a labelled block
fn print_post(post: &Post) {
    println!("{} {}", "title:         ".cyan(), post.title);
    println!("{} {}", "url:           ".cyan(), post.url);
    println!("{} {}", "tags:          ".cyan(), post.tags.join(", "));
    println!("{} {}", "comment count: ".cyan(), post.comment_count);
    println!("{} {}", "id:            ".cyan(), post.short_id);
    println!();
}

/// Read one line from the prompt, with history persisted under the data dir.
///
/// Returns None on Ctrl-C / Ctrl-D, which count as a normal quit.
fn read_choice() -> Result<Option<String>> {
    let mut rl = DefaultEditor::new()?;

    let history_path = Paths::new().state("lob").join("history.txt");
    if let Some(dir) = history_path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }
    let _ = rl.load_history(&history_path);

    let line = match rl.readline("> ") {
        Ok(line) => line,
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
        Err(e) => return Err(e).context("Failed to read input"),
    };

    let _ = rl.add_history_entry(&line);
    let _ = rl.save_history(&history_path);

    Ok(Some(line.trim().to_lowercase()))
}

/// Launch the system browser on a URL
fn open_in_browser(url: &str) -> Result<()> {
    let status = Command::new(OPENER)
        .arg(url)
        .status()
        .with_context(|| format!("Failed to run {}", OPENER))?;

    if !status.success() {
        bail!("{} {} exited with {}", OPENER, url, status);
    }
    Ok(())
}

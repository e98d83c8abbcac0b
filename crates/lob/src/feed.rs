//! Story feed access
//!
//! Thin wrappers over the lobste.rs public JSON endpoints. The feed is an
//! array of post objects; a single story's comments live at
//! `/s/<short_id>.json` under a `comments` key.

use anyhow::Result;
use serde::Deserialize;

use crate::matcher::Candidate;
use crate::thread::Comment;

pub const HOTTEST_URL: &str = "https://lobste.rs/hottest.json";
pub const NEWEST_URL: &str = "https://lobste.rs/newest.json";

/// One story from the feed, taken verbatim from the upstream response
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub comment_count: u32,
    pub short_id: String,
}

impl Candidate for Post {
    fn fields(&self) -> [&str; 2] {
        [&self.title, &self.short_id]
    }

    fn label(&self) -> String {
        format!("{}  {}", self.short_id, self.title)
    }
}

/// The comment payload for a single story
#[derive(Debug, Deserialize)]
pub struct CommentFeed {
    pub comments: Vec<Comment>,
}

/// Fetch the front page. `hot` selects the hottest feed, otherwise newest.
pub fn fetch_posts(hot: bool) -> Result<Vec<Post>> {
    let url = if hot { HOTTEST_URL } else { NEWEST_URL };
    satchel_core::http::get_json(url)
}

/// Fetch the flat comment list for a story
pub fn fetch_comments(short_id: &str) -> Result<Vec<Comment>> {
    let feed: CommentFeed = satchel_core::http::get_json(&comments_url(short_id))?;
    Ok(feed.comments)
}

/// URL of a single story's comment JSON
pub fn comments_url(short_id: &str) -> String {
    format!("https://lobste.rs/s/{}.json", short_id)
}

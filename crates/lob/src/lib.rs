//! lob - Read the lobste.rs front page from the terminal
//!
//! Fetches the hottest or newest stories from the public JSON feed, then
//! lets you open a story in the browser or read its comment thread with
//! reply nesting reconstructed from the flat comment list.
//!
//! Commands (at the prompt):
//! - open FRAGMENT: open the matching story's URL in a browser
//! - FRAGMENT: print the matching story's comment thread
//! - exit: quit
//!
//! A fragment is a prefix of either a story's title or its short id,
//! matched case-insensitively; zero or multiple matches are errors.

pub mod feed;
pub mod matcher;
pub mod thread;

pub use feed::Post;
pub use matcher::{find_single_match, Candidate, MatchError};
pub use thread::{Comment, ThreadError};

//! Comment thread reconstruction
//!
//! The upstream feed delivers a story's comments as a flat list in display
//! order, each carrying an optional parent id. Rebuilding the nesting is
//! done in two passes: first a parent-to-children adjacency map, then a
//! breadth-first walk from the roots assigning depths. This stays correct
//! even if a child is listed before its parent, and leaves anything on a
//! parent cycle unvisited so it can be reported instead of mis-rendered.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Deserialize;
use thiserror::Error;

/// One comment from a story's flat comment list
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub short_id: String,
    pub parent_comment: Option<String>,
    pub comment_plain: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThreadError {
    #[error("comment thread contains a parent cycle involving '{0}'")]
    ParentCycle(String),
}

/// Compute the nesting depth of every comment.
///
/// A comment with no parent is a root at depth 0. A comment whose parent id
/// does not appear in the list at all is also treated as a root rather than
/// dropped, so a truncated thread still renders. A comment whose parent
/// chain never reaches a root is on a cycle and yields an error.
pub fn depth_index(comments: &[Comment]) -> Result<HashMap<String, usize>, ThreadError> {
    let ids: HashSet<&str> = comments.iter().map(|c| c.short_id.as_str()).collect();

    // Pass 1: adjacency. Parents absent from the id set make their children
    // degenerate roots.
    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut roots: Vec<&str> = Vec::new();

    for c in comments {
        let parent = c.parent_comment.as_deref().filter(|p| ids.contains(p));

        match parent {
            Some(p) => children.entry(p).or_default().push(&c.short_id),
            None => roots.push(&c.short_id),
        }
    }

    // Pass 2: breadth-first from the roots.
    let mut depth: HashMap<String, usize> = HashMap::new();
    let mut queue: VecDeque<(&str, usize)> = roots.into_iter().map(|id| (id, 0)).collect();

    while let Some((id, d)) = queue.pop_front() {
        depth.insert(id.to_string(), d);
        for &child in children.get(id).map(Vec::as_slice).unwrap_or(&[]) {
            queue.push_back((child, d + 1));
        }
    }

    if depth.len() < comments.len() {
        let stranded = comments
            .iter()
            .find(|c| !depth.contains_key(&c.short_id))
            .map(|c| c.short_id.clone())
            .unwrap_or_default();
        return Err(ThreadError::ParentCycle(stranded));
    }

    Ok(depth)
}

/// Depth-annotated display lines, in the same order as the input.
///
/// Bodies have paragraph breaks collapsed so each comment stays on one
/// readable block.
pub fn layout(comments: &[Comment]) -> Result<Vec<(usize, String)>, ThreadError> {
    let depth = depth_index(comments)?;

    Ok(comments
        .iter()
        .map(|c| (depth[&c.short_id], render_body(&c.comment_plain)))
        .collect())
}

/// Collapse the feed's paragraph separator (CRLF CRLF) to a single space
pub fn render_body(raw: &str) -> String {
    raw.replace("\r\n\r\n", " ")
}

/// Format one comment line: depth tabs, a bullet, then the body
pub fn format_line(depth: usize, body: &str) -> String {
    format!("{}* {}", "\t".repeat(depth), body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: &str, parent: Option<&str>, body: &str) -> Comment {
        Comment {
            short_id: id.to_string(),
            parent_comment: parent.map(String::from),
            comment_plain: body.to_string(),
        }
    }

    #[test]
    fn test_chain_depths() {
        let comments = vec![
            comment("a", None, "root"),
            comment("b", Some("a"), "reply"),
            comment("c", Some("b"), "reply to reply"),
        ];

        let depth = depth_index(&comments).unwrap();
        assert_eq!(depth["a"], 0);
        assert_eq!(depth["b"], 1);
        assert_eq!(depth["c"], 2);
    }

    #[test]
    fn test_unknown_parent_is_degenerate_root() {
        let comments = vec![
            comment("a", None, "root"),
            comment("b", Some("zzz"), "orphan"),
        ];

        let depth = depth_index(&comments).unwrap();
        assert_eq!(depth["a"], 0);
        assert_eq!(depth["b"], 0);
    }

    #[test]
    fn test_child_listed_before_parent() {
        let comments = vec![
            comment("b", Some("a"), "reply"),
            comment("a", None, "root"),
        ];

        let depth = depth_index(&comments).unwrap();
        assert_eq!(depth["a"], 0);
        assert_eq!(depth["b"], 1);
    }

    #[test]
    fn test_sibling_forest() {
        let comments = vec![
            comment("a", None, "first root"),
            comment("b", None, "second root"),
            comment("c", Some("b"), "reply to second"),
        ];

        let depth = depth_index(&comments).unwrap();
        assert_eq!(depth["a"], 0);
        assert_eq!(depth["b"], 0);
        assert_eq!(depth["c"], 1);
    }

    #[test]
    fn test_parent_cycle_is_an_error() {
        let comments = vec![
            comment("a", Some("b"), "chicken"),
            comment("b", Some("a"), "egg"),
        ];

        let err = depth_index(&comments).unwrap_err();
        assert!(matches!(err, ThreadError::ParentCycle(_)));
    }

    #[test]
    fn test_layout_preserves_input_order() {
        let comments = vec![
            comment("a", None, "root"),
            comment("b", Some("a"), "reply"),
            comment("c", None, "second root"),
        ];

        let lines = layout(&comments).unwrap();
        assert_eq!(
            lines,
            vec![
                (0, "root".to_string()),
                (1, "reply".to_string()),
                (0, "second root".to_string()),
            ]
        );
    }

    #[test]
    fn test_paragraph_breaks_collapse_to_space() {
        let comments = vec![comment("a", None, "first paragraph\r\n\r\nsecond paragraph")];

        let lines = layout(&comments).unwrap();
        assert_eq!(lines[0].1, "first paragraph second paragraph");
    }

    #[test]
    fn test_format_line_indents_by_depth_tabs() {
        assert_eq!(format_line(0, "root"), "* root");
        assert_eq!(format_line(2, "deep"), "\t\t* deep");
    }

    #[test]
    fn test_empty_thread() {
        let depth = depth_index(&[]).unwrap();
        assert!(depth.is_empty());
        assert!(layout(&[]).unwrap().is_empty());
    }
}

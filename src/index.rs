//! Post index persistence (`posts/index.json`).
//!
//! The index is the single shared file of the pipeline. It is read once at
//! the start of a run and written once at the end; last writer wins. That is
//! safe under the intended usage of one scheduled run per day.
use crate::util::{read_json, write_json_pretty};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Retention cap: only the most recent entries are kept.
pub const MAX_POSTS: usize = 500;

/// One post's metadata as persisted in the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    pub title: String,
    /// Site-relative URL; unique within the index.
    pub url: String,
    /// Publish date as YYYY-MM-DD.
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

/// The persisted collection, shaped `{"posts": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIndex {
    #[serde(default)]
    pub posts: Vec<PostEntry>,
}

impl PostIndex {
    /// Load the index, defaulting to empty when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        read_json(path)
    }

    /// Replace-by-url insert: any existing entry with the same url is
    /// removed before the new entry is appended.
    pub fn upsert(&mut self, entry: PostEntry) {
        self.posts.retain(|post| post.url != entry.url);
        self.posts.push(entry);
    }

    /// Sort ascending by date, trim to the retention cap, and persist
    /// pretty-printed.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.posts.sort_by(|a, b| a.date.cmp(&b.date));
        if self.posts.len() > MAX_POSTS {
            self.posts = self.posts.split_off(self.posts.len() - MAX_POSTS);
        }
        write_json_pretty(path, self)
    }

    /// Entries newest-first, for listing output.
    pub fn sorted_desc(&self) -> Vec<&PostEntry> {
        let mut entries: Vec<&PostEntry> = self.posts.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }
}

//! Listing regeneration for the static shell pages.
//!
//! Generated blocks are spliced between exact marker comments inside
//! `blog.html` and `index.html`. A page without its marker pair is left
//! untouched; the shell files are owned by the site, not by this tool.
use crate::index::{PostEntry, PostIndex};
use crate::site::SitePaths;
use crate::util::escape_markup;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const BLOG_LIST_START: &str = "<!-- BLOG-LIST:START -->";
pub const BLOG_LIST_END: &str = "<!-- BLOG-LIST:END -->";
pub const LATEST_START: &str = "<!-- LATEST-POSTS:START -->";
pub const LATEST_END: &str = "<!-- LATEST-POSTS:END -->";

/// How many entries the homepage latest block shows.
pub const LATEST_COUNT: usize = 6;

/// Rewrite both marker regions from the current index.
pub fn refresh_listings(paths: &SitePaths, index: &PostIndex) -> Result<()> {
    let entries = index.sorted_desc();

    let cards = render_cards(&entries);
    let blog_updated = splice_file(&paths.blog_page(), BLOG_LIST_START, BLOG_LIST_END, &cards)?;
    if !blog_updated {
        tracing::info!("blog.html has no list markers, skipped");
    }

    let latest = render_latest(&entries);
    let home_updated = splice_file(&paths.home_page(), LATEST_START, LATEST_END, &latest)?;
    if !home_updated {
        tracing::info!("index.html has no latest markers, skipped");
    }

    Ok(())
}

/// Full blog list: one link card per entry, newest first.
pub fn render_cards(entries: &[&PostEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let title = escape_markup(&entry.title);
        let url = escape_markup(&entry.url);
        let excerpt = escape_markup(&entry.excerpt);
        let joined_tags = entry.tags.join(", ");
        let tags = escape_markup(&joined_tags);
        out.push_str(&format!("<a class='card post-card' href='{url}'>\n"));
        if let Some(cover) = &entry.cover {
            let cover = escape_markup(cover);
            out.push_str(&format!("<img src='{cover}' alt='' loading='lazy'/>\n"));
        }
        out.push_str(&format!(
            "<h3>{title}</h3>\n<p>{excerpt}</p>\n<div class='meta'>{} • {tags}</div>\n</a>\n",
            entry.date
        ));
    }
    out
}

/// Compact latest block for the homepage: at most [`LATEST_COUNT`] entries.
pub fn render_latest(entries: &[&PostEntry]) -> String {
    let mut out = String::from("<ul class='latest'>\n");
    for entry in entries.iter().take(LATEST_COUNT) {
        let title = escape_markup(&entry.title);
        let url = escape_markup(&entry.url);
        out.push_str(&format!(
            "<li><a href='{url}'>{title}</a><span class='date'>{}</span></li>\n",
            entry.date
        ));
    }
    out.push_str("</ul>");
    out
}

/// Replace the region between `start` and `end`, keeping the markers.
///
/// Returns `None` when the pair is absent or ill-ordered.
pub fn splice_region(content: &str, start: &str, end: &str, block: &str) -> Option<String> {
    let start_at = content.find(start)?;
    let after_start = start_at + start.len();
    let end_at = after_start + content[after_start..].find(end)?;
    let mut spliced =
        String::with_capacity(content.len() + block.len());
    spliced.push_str(&content[..after_start]);
    spliced.push('\n');
    spliced.push_str(block);
    spliced.push('\n');
    spliced.push_str(&content[end_at..]);
    Some(spliced)
}

/// Splice a marker region in place; missing file or markers is a no-op.
fn splice_file(path: &Path, start: &str, end: &str, block: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let Some(spliced) = splice_region(&content, start, end, block) else {
        return Ok(false);
    };
    fs::write(path, spliced).with_context(|| format!("write {}", path.display()))?;
    Ok(true)
}

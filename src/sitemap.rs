//! Sitemap generation.
//!
//! A pure transform of the post index into `sitemap.xml`: one `<url>` block
//! per known static page plus one per post, with fixed priority and
//! changefreq constants per page type.
use crate::index::PostIndex;
use crate::site::SitePaths;
use crate::util::{escape_markup, write_text};
use anyhow::Result;
use chrono::NaiveDate;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Static shell pages: (path, changefreq, priority). The empty path is the
/// site root.
const STATIC_PAGES: [(&str, &str, &str); 4] = [
    ("", "weekly", "1.0"),
    ("blog.html", "daily", "0.8"),
    ("impressum.html", "yearly", "0.3"),
    ("datenschutz.html", "yearly", "0.3"),
];

struct UrlEntry {
    loc: String,
    lastmod: String,
    changefreq: &'static str,
    priority: &'static str,
}

/// Build and write `sitemap.xml` for the site.
pub fn build_sitemap(
    paths: &SitePaths,
    base_url: &str,
    today: NaiveDate,
    index: &PostIndex,
) -> Result<()> {
    let xml = render_sitemap(base_url, today, index);
    write_text(&paths.sitemap_xml(), &xml)
}

fn render_sitemap(base_url: &str, today: NaiveDate, index: &PostIndex) -> String {
    let base = base_url.trim_end_matches('/');
    let today = today.format("%Y-%m-%d").to_string();

    let mut entries = Vec::with_capacity(STATIC_PAGES.len() + index.posts.len());
    for (page, changefreq, priority) in STATIC_PAGES {
        entries.push(UrlEntry {
            loc: format!("{base}/{page}"),
            lastmod: today.clone(),
            changefreq,
            priority,
        });
    }
    for post in &index.posts {
        entries.push(UrlEntry {
            loc: format!("{base}/{}", post.url),
            lastmod: post.date.clone(),
            changefreq: "weekly",
            priority: "0.8",
        });
    }

    let mut xml = String::with_capacity(4096);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");
    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_markup(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.changefreq);
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(entry.priority);
        xml.push_str("</priority>\n  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

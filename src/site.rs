//! Site tree layout.
//!
//! All pipeline outputs live under a single site root; keeping the path
//! derivations in one place makes the on-disk contract obvious.
use std::path::PathBuf;

/// Well-known locations inside a site root.
pub struct SitePaths {
    root: PathBuf,
}

impl SitePaths {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Directory holding generated post pages.
    pub fn posts_dir(&self) -> PathBuf {
        self.root.join("posts")
    }

    /// The persisted post index.
    pub fn index_json(&self) -> PathBuf {
        self.root.join("posts").join("index.json")
    }

    /// Directory holding generated cover images.
    pub fn covers_dir(&self) -> PathBuf {
        self.root.join("assets").join("covers")
    }

    /// Static page carrying the full blog list marker region.
    pub fn blog_page(&self) -> PathBuf {
        self.root.join("blog.html")
    }

    /// Static homepage carrying the latest-posts marker region.
    pub fn home_page(&self) -> PathBuf {
        self.root.join("index.html")
    }

    pub fn sitemap_xml(&self) -> PathBuf {
        self.root.join("sitemap.xml")
    }
}

//! Shared test infrastructure for integration tests.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Marker pair used by blog.html in fixtures.
pub const BLOG_MARKERS: (&str, &str) = ("<!-- BLOG-LIST:START -->", "<!-- BLOG-LIST:END -->");
/// Marker pair used by index.html in fixtures.
pub const LATEST_MARKERS: (&str, &str) =
    ("<!-- LATEST-POSTS:START -->", "<!-- LATEST-POSTS:END -->");

/// Create a minimal site root with marker-bearing shell pages.
pub fn site_fixture() -> TempDir {
    let dir = TempDir::new().expect("create temp site");
    let blog = format!(
        "<html><body><h1>Blog</h1>\n{}\n{}\n</body></html>",
        BLOG_MARKERS.0, BLOG_MARKERS.1
    );
    let home = format!(
        "<html><body><h1>Start</h1>\n{}\n{}\n</body></html>",
        LATEST_MARKERS.0, LATEST_MARKERS.1
    );
    std::fs::write(dir.path().join("blog.html"), blog).expect("write blog.html");
    std::fs::write(dir.path().join("index.html"), home).expect("write index.html");
    dir
}

/// Run the ablog binary against a site root with a clean credential env.
pub fn run_ablog(site: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ablog"))
        .args(args)
        .arg("--site")
        .arg(site)
        .env_remove("OPENAI_API_KEY")
        .output()
        .expect("run ablog")
}

//! End-to-end offline run: one `generate` invocation must produce a post
//! page, a cover, an updated index, and refreshed listing regions, without
//! touching the network.

mod common;

use common::{run_ablog, site_fixture, BLOG_MARKERS, LATEST_MARKERS};
use serde_json::Value;

#[test]
fn offline_generate_produces_post_index_and_listings() {
    let site = site_fixture();

    let output = run_ablog(
        site.path(),
        &[
            "generate",
            "--offline",
            "--topic",
            "Beispiel",
            "--date",
            "2024-05-01",
        ],
    );
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated"), "missing confirmation line");

    // Post page at the canonical path, topic as the h1.
    let post_path = site.path().join("posts/2024-05-01-beispiel.html");
    let page = std::fs::read_to_string(&post_path).expect("post page written");
    assert!(page.contains("<h1>Beispiel</h1>"));
    assert!(page.contains("href='posts/2024-05-01-beispiel.html'"));

    // Cover image next to it.
    assert!(site.path().join("assets/covers/beispiel.svg").is_file());

    // Exactly one index record keyed by the post URL.
    let index: Value = serde_json::from_str(
        &std::fs::read_to_string(site.path().join("posts/index.json")).expect("index written"),
    )
    .expect("index parses");
    let posts = index["posts"].as_array().expect("posts array");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["url"], "posts/2024-05-01-beispiel.html");
    assert_eq!(posts[0]["date"], "2024-05-01");
    assert_eq!(posts[0]["title"], "Beispiel");

    // Listing regions now carry the post link, markers intact.
    let blog = std::fs::read_to_string(site.path().join("blog.html")).unwrap();
    assert!(blog.contains(BLOG_MARKERS.0) && blog.contains(BLOG_MARKERS.1));
    assert!(blog.contains("posts/2024-05-01-beispiel.html"));

    let home = std::fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(home.contains(LATEST_MARKERS.0) && home.contains(LATEST_MARKERS.1));
    assert!(home.contains("posts/2024-05-01-beispiel.html"));
}

#[test]
fn rerun_for_the_same_day_adds_a_time_suffixed_page() {
    let site = site_fixture();
    let args = [
        "generate",
        "--offline",
        "--topic",
        "Beispiel",
        "--date",
        "2024-05-01",
    ];

    assert!(run_ablog(site.path(), &args).status.success());
    assert!(run_ablog(site.path(), &args).status.success());

    let entries: Vec<String> = std::fs::read_dir(site.path().join("posts"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".html"))
        .collect();
    assert_eq!(entries.len(), 2, "expected two pages, got {entries:?}");
    assert!(entries.contains(&"2024-05-01-beispiel.html".to_string()));
    assert!(entries
        .iter()
        .any(|name| name.starts_with("2024-05-01-beispiel-") && name.len() > 26));

    // Both pages are distinct URLs, so the index holds two records.
    let index: Value = serde_json::from_str(
        &std::fs::read_to_string(site.path().join("posts/index.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(index["posts"].as_array().unwrap().len(), 2);
}

#[test]
fn missing_markers_are_a_silent_no_op() {
    let site = site_fixture();
    std::fs::write(site.path().join("blog.html"), "<html>ohne Marker</html>").unwrap();

    let output = run_ablog(
        site.path(),
        &[
            "generate",
            "--offline",
            "--topic",
            "Beispiel",
            "--date",
            "2024-05-01",
        ],
    );
    assert!(output.status.success());
    let blog = std::fs::read_to_string(site.path().join("blog.html")).unwrap();
    assert_eq!(blog, "<html>ohne Marker</html>");
}

#[test]
fn require_key_without_credential_is_fatal() {
    let site = site_fixture();
    let output = run_ablog(site.path(), &["generate", "--require-key"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("OPENAI_API_KEY"),
        "diagnostic missing: {stderr}"
    );
    // Nothing durable was written.
    assert!(!site.path().join("posts/index.json").exists());
}

#[test]
fn generate_without_topic_uses_the_rotation() {
    let site = site_fixture();
    let output = run_ablog(
        site.path(),
        &["generate", "--offline", "--date", "2024-05-01"],
    );
    assert!(output.status.success());

    let index: Value = serde_json::from_str(
        &std::fs::read_to_string(site.path().join("posts/index.json")).unwrap(),
    )
    .unwrap();
    let posts = index["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    // 2024-05-01 is ISO week 18, day 1: (18 + 1) % 15 = 4.
    assert_eq!(posts[0]["title"], "Website-Umzug: Zero-Downtime-Migration Schritt fuer Schritt");
}

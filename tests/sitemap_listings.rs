//! Integration coverage for the standalone `listings` and `sitemap`
//! subcommands, which only read the persisted index.

mod common;

use common::{run_ablog, site_fixture};

fn seed_index(site: &std::path::Path) {
    let index = serde_json::json!({
        "posts": [
            {
                "title": "Caching verstehen",
                "url": "posts/2024-04-30-caching.html",
                "date": "2024-04-30",
                "excerpt": "Grundlagen zum Caching",
                "tags": ["Hosting"],
                "cover": "assets/covers/caching.svg"
            },
            {
                "title": "Beispiel",
                "url": "posts/2024-05-01-beispiel.html",
                "date": "2024-05-01",
                "excerpt": "Kurz erklaert",
                "tags": ["Cloud"]
            }
        ]
    });
    let posts_dir = site.join("posts");
    std::fs::create_dir_all(&posts_dir).unwrap();
    std::fs::write(
        posts_dir.join("index.json"),
        serde_json::to_string_pretty(&index).unwrap(),
    )
    .unwrap();
}

#[test]
fn listings_rebuilds_regions_from_the_index() {
    let site = site_fixture();
    seed_index(site.path());

    let output = run_ablog(site.path(), &["listings"]);
    assert!(
        output.status.success(),
        "listings failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("2 posts"));

    let blog = std::fs::read_to_string(site.path().join("blog.html")).unwrap();
    // Newest first in the full list.
    let newest = blog.find("posts/2024-05-01-beispiel.html").unwrap();
    let older = blog.find("posts/2024-04-30-caching.html").unwrap();
    assert!(newest < older);

    let home = std::fs::read_to_string(site.path().join("index.html")).unwrap();
    assert!(home.contains("Beispiel"));
    assert!(home.contains("Caching verstehen"));
}

#[test]
fn listings_with_no_index_is_empty_but_succeeds() {
    let site = site_fixture();
    let output = run_ablog(site.path(), &["listings"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 posts"));
}

#[test]
fn sitemap_lists_static_pages_and_posts() {
    let site = site_fixture();
    seed_index(site.path());

    let output = run_ablog(
        site.path(),
        &["sitemap", "--base-url", "https://blog.example.com"],
    );
    assert!(
        output.status.success(),
        "sitemap failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let xml = std::fs::read_to_string(site.path().join("sitemap.xml")).unwrap();
    assert!(xml.contains("<loc>https://blog.example.com/</loc>"));
    assert!(xml.contains("<loc>https://blog.example.com/blog.html</loc>"));
    assert!(xml.contains("<loc>https://blog.example.com/posts/2024-05-01-beispiel.html</loc>"));
    assert!(xml.contains("<lastmod>2024-05-01</lastmod>"));
    assert_eq!(xml.matches("<url>").count(), 6);
}

#[test]
fn sitemap_with_corrupt_index_fails() {
    let site = site_fixture();
    let posts_dir = site.path().join("posts");
    std::fs::create_dir_all(&posts_dir).unwrap();
    std::fs::write(posts_dir.join("index.json"), "{kaputt").unwrap();

    let output = run_ablog(site.path(), &["sitemap"]);
    assert!(!output.status.success());
}

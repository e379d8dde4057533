//! Post page rendering and output paths.
use crate::article::Article;
use crate::util::{escape_markup, truncate_chars};
use std::path::{Path, PathBuf};

const SITE_NAME: &str = "CloudKing";
const SITE_TAGLINE: &str = "Hosting & Cloud Tipps";

/// Meta descriptions longer than this are truncated with an ellipsis.
const META_MAX_CHARS: usize = 155;
const META_KEEP_CHARS: usize = 152;

/// Truncate a meta description to the character budget, marking the cut.
pub fn truncate_meta(meta: &str) -> String {
    if meta.chars().count() <= META_MAX_CHARS {
        return meta.to_string();
    }
    let mut truncated = truncate_chars(meta, META_KEEP_CHARS);
    truncated.push('…');
    truncated
}

/// Resolved output location for a post.
pub struct PostLocation {
    pub path: PathBuf,
    /// Canonical site-relative URL, e.g. `posts/2024-05-01-beispiel.html`.
    pub url: String,
}

/// Derive the post file path from date and slug.
///
/// If that exact file already exists (a re-run on the same day), the given
/// time suffix disambiguates. Collision avoidance only; concurrent runs are
/// not otherwise serialized.
pub fn resolve_post_location(
    posts_dir: &Path,
    date: &str,
    slug: &str,
    time_suffix: &str,
) -> PostLocation {
    let mut file_name = format!("{date}-{slug}.html");
    if posts_dir.join(&file_name).exists() {
        file_name = format!("{date}-{slug}-{time_suffix}.html");
    }
    PostLocation {
        path: posts_dir.join(&file_name),
        url: format!("posts/{file_name}"),
    }
}

/// Render the complete standalone HTML document for a post.
///
/// The article body is trusted and spliced in verbatim; title, description
/// and URLs are escaped on interpolation.
pub fn render_page(article: &Article, canonical: &str, cover_url: &str) -> String {
    let title = escape_markup(&article.title);
    let meta = truncate_meta(&article.meta);
    let meta = escape_markup(&meta);
    let canonical = escape_markup(canonical);
    let cover = escape_markup(cover_url);

    let head = format!(
        "<!doctype html><html lang='de'><head><meta charset='utf-8'/>\n\
         <meta name='viewport' content='width=device-width, initial-scale=1'/>\n\
         <title>{title}</title><meta name='description' content='{meta}'/>\n\
         <link rel='canonical' href='{canonical}'/><link rel='stylesheet' href='../assets/style.css'/></head>\n\
         <body><div class='container'>\n\
         <nav class='nav'><a class='logo' href='../index.html'><span class='badge'>Cloud</span>King</a>\n\
         <div><a class='btn secondary' href='../blog.html'>Blog</a><a class='btn' href='../kontakt.html'>Kontakt</a></div></nav>\n\
         <article class='card'>\n\
         <figure><img src='../{cover}' alt='{title}' loading='lazy'/></figure>"
    );
    let foot = format!(
        "</article>\n\
         <footer><hr/><div>© <span id='year'></span> {SITE_NAME} • {SITE_TAGLINE}</div>\n\
         <script>document.getElementById('year').textContent=new Date().getFullYear()</script></footer>\n\
         </div></body></html>"
    );
    format!("{head}{}{foot}", article.html)
}

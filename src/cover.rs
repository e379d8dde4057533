//! Cover image generation.
//!
//! Each post gets a simple 1200x630 SVG card named after its slug. Covers are
//! keyed by slug alone, so a same-day re-run overwrites the existing file.
use crate::util::{escape_markup, write_text};
use anyhow::Result;
use std::path::Path;

const COVER_TAGLINE: &str = "CloudKing • Hosting &amp; Cloud";

/// Write `<covers_dir>/<slug>.svg` and return the site-relative URL.
pub fn write_cover(covers_dir: &Path, title: &str, slug: &str) -> Result<String> {
    let safe_title = escape_markup(title);
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='1200' height='630'>\n\
         <rect width='100%' height='100%' fill='#0b1220'/>\n\
         <text x='60' y='360' font-family='Arial' font-size='54' fill='#e6ebf5' font-weight='700'>{safe_title}</text>\n\
         <text x='60' y='430' font-family='Arial' font-size='26' fill='#8be9fd'>{COVER_TAGLINE}</text>\n\
         </svg>"
    );
    write_text(&covers_dir.join(format!("{slug}.svg")), &svg)?;
    Ok(format!("assets/covers/{slug}.svg"))
}

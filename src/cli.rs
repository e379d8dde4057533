//! CLI argument parsing for the blog pipeline.
//!
//! The CLI is intentionally thin: each subcommand maps onto one pipeline
//! operation so the same core logic can be driven from a scheduler or by hand.
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default canonical base URL used for sitemap `<loc>` entries.
pub const DEFAULT_BASE_URL: &str = "https://example.com";

/// Root CLI entrypoint for the blog pipeline.
#[derive(Parser, Debug)]
#[command(
    name = "ablog",
    version,
    about = "LM-driven static blog post generator",
    after_help = "Commands:\n  generate --site <dir>   Generate the post that is due and refresh listings\n  listings --site <dir>   Rebuild listing regions from posts/index.json\n  sitemap --site <dir>    Rebuild sitemap.xml from posts/index.json\n\nExamples:\n  ablog generate --site ./site\n  ablog generate --site ./site --topic \"Caching verstehen\" --offline\n  ablog listings --site ./site\n  ablog sitemap --site ./site --base-url https://blog.example.com",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level pipeline commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Generate(GenerateArgs),
    Listings(ListingsArgs),
    Sitemap(SitemapArgs),
}

/// Generate command inputs for a single post run.
#[derive(Parser, Debug)]
#[command(about = "Generate the due post, update the index, refresh listings")]
pub struct GenerateArgs {
    /// Site root containing posts/, assets/, blog.html and index.html
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub site: PathBuf,

    /// Explicit topic instead of the date-based rotation
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Publish date override as YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Skip the generation API and use the offline template
    #[arg(long)]
    pub offline: bool,

    /// Fail when OPENAI_API_KEY is unset instead of degrading to the template
    #[arg(long, conflicts_with = "offline")]
    pub require_key: bool,
}

/// Listings command inputs.
#[derive(Parser, Debug)]
#[command(about = "Rebuild the blog list and homepage latest block")]
pub struct ListingsArgs {
    /// Site root containing posts/, assets/, blog.html and index.html
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub site: PathBuf,
}

/// Sitemap command inputs.
#[derive(Parser, Debug)]
#[command(about = "Rebuild sitemap.xml from the post index")]
pub struct SitemapArgs {
    /// Site root containing posts/, assets/, blog.html and index.html
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub site: PathBuf,

    /// Canonical base URL for sitemap <loc> entries
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

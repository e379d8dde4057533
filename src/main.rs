use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs;

mod article;
mod cli;
mod cover;
mod index;
mod listing;
mod lm;
mod page;
mod site;
mod sitemap;
mod slug;
mod topics;
mod util;

use article::Article;
use cli::{Command, GenerateArgs, ListingsArgs, RootArgs, SitemapArgs};
use index::{PostEntry, PostIndex};
use site::SitePaths;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = RootArgs::parse();
    match args.command {
        Command::Generate(args) => cmd_generate(args),
        Command::Listings(args) => cmd_listings(args),
        Command::Sitemap(args) => cmd_sitemap(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let paths = SitePaths::new(args.site);
    let date = match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("parse --date {raw}"))?,
        None => Local::now().date_naive(),
    };
    let date_str = date.format("%Y-%m-%d").to_string();

    let topic = args
        .topic
        .unwrap_or_else(|| topics::due_topic(date).to_string());
    tracing::info!(topic = %topic, date = %date_str, "generating post");

    let article = obtain_article(&topic, args.offline, args.require_key)?;

    let slug = slug::slugify(&topic);
    let posts_dir = paths.posts_dir();
    fs::create_dir_all(&posts_dir)
        .with_context(|| format!("create {}", posts_dir.display()))?;
    let time_suffix = Local::now().format("%H%M").to_string();
    let location = page::resolve_post_location(&posts_dir, &date_str, &slug, &time_suffix);

    let cover_url = cover::write_cover(&paths.covers_dir(), &article.title, &slug)?;
    let document = page::render_page(&article, &location.url, &cover_url);
    util::write_text(&location.path, &document)?;

    let mut post_index = PostIndex::load(&paths.index_json())?;
    post_index.upsert(PostEntry {
        title: article.title.clone(),
        url: location.url.clone(),
        date: date_str,
        excerpt: article.meta.trim().to_string(),
        tags: article.tags.clone(),
        cover: Some(cover_url),
    });
    post_index.save(&paths.index_json())?;

    listing::refresh_listings(&paths, &post_index)?;

    println!("Generated {}", location.path.display());
    Ok(())
}

fn cmd_listings(args: ListingsArgs) -> Result<()> {
    let paths = SitePaths::new(args.site);
    let post_index = PostIndex::load(&paths.index_json())?;
    listing::refresh_listings(&paths, &post_index)?;
    println!("Refreshed listings from {} posts", post_index.posts.len());
    Ok(())
}

fn cmd_sitemap(args: SitemapArgs) -> Result<()> {
    let paths = SitePaths::new(args.site);
    let post_index = PostIndex::load(&paths.index_json())?;
    let today = Local::now().date_naive();
    sitemap::build_sitemap(&paths, &args.base_url, today, &post_index)?;
    println!("Wrote {}", paths.sitemap_xml().display());
    Ok(())
}

/// Pick the article source variant for this run.
///
/// Offline mode and a missing credential both resolve to the template;
/// `--require-key` turns the missing credential into a hard failure. Failed
/// API attempts always converge on the template so a run never ends without
/// a usable article.
fn obtain_article(topic: &str, offline: bool, require_key: bool) -> Result<Article> {
    if offline {
        return Ok(Article::offline(topic));
    }
    let Some(api_key) = lm::api_key_from_env() else {
        if require_key {
            bail!("OPENAI_API_KEY is not set");
        }
        tracing::info!("no API key configured, using the offline template");
        return Ok(Article::offline(topic));
    };
    match lm::request_article(topic, &api_key) {
        Ok(article) => Ok(article),
        Err(err) => {
            tracing::warn!(error = %err, "falling back to the offline template");
            Ok(Article::offline(topic))
        }
    }
}

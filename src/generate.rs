//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Reads the scan manifest, orders the pages
//! with [`PageIndexBuilder`], and writes the blog index.
//!
//! ## Output Structure
//!
//! ```text
//! public/
//! └── index.html     # Bio, "Writings:" and one link per listed page
//! ```
//!
//! ## Page Anatomy
//!
//! - `<title>` is the configured author name; `description` and `keywords`
//!   `<meta>` tags come from `[meta]`.
//! - The bio block renders `[bio].text` as markdown, with an optional avatar.
//! - The list holds one `<li><a>` per [`LinkEntry`], in index order.
//! - When `[analytics].pixel_url` is set, an `<amp-pixel>` beacon is emitted
//!   as-is. Nothing is fetched at build time.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated values are escaped.

use crate::config::{BioConfig, SiteConfig};
use crate::index::{PageIndexBuilder, exclusion};
use crate::links::LinkPrefix;
use crate::scan::Manifest;
use crate::types::LinkEntry;
use log::info;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the generate stage produced.
#[derive(Debug)]
pub struct GenerateReport {
    /// Links on the index page, in display order.
    pub entries: Vec<LinkEntry>,
    /// Pages left out by the inclusion rules.
    pub excluded: usize,
    /// Path of the written `index.html`.
    pub index_path: PathBuf,
}

const CSS: &str = include_str!("../static/style.css");

/// Read a manifest from disk and write the site to `output_dir`.
pub fn generate(manifest_path: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    write_site(&manifest, output_dir)
}

/// Write the index page for an in-memory manifest.
pub fn write_site(manifest: &Manifest, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let entries = build_entries(manifest);
    let excluded = manifest
        .pages
        .iter()
        .filter(|p| exclusion(p).is_some())
        .count();

    fs::create_dir_all(output_dir)?;
    let index_path = output_dir.join("index.html");
    let page = render_index(&entries, &manifest.config);
    fs::write(&index_path, page.into_string())?;
    info!(
        "wrote {} ({} listed, {} excluded)",
        index_path.display(),
        entries.len(),
        excluded
    );

    Ok(GenerateReport {
        entries,
        excluded,
        index_path,
    })
}

/// Index links for a manifest, with the configured link prefix applied.
pub fn build_entries(manifest: &Manifest) -> Vec<LinkEntry> {
    PageIndexBuilder::new(LinkPrefix::new(&manifest.config.link_prefix)).build(&manifest.pages)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the document shell with title and meta tags.
fn base_document(config: &SiteConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.author_name) }
                meta name="description" content=(config.meta.description);
                meta name="keywords" content=(config.meta.keywords);
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the author bio block.
fn render_bio(bio: &BioConfig, author_name: &str) -> Markup {
    let mut bio_html = String::new();
    md_html::push_html(&mut bio_html, Parser::new(&bio.text));

    html! {
        div.bio {
            @if !bio.avatar.is_empty() {
                img.bio-avatar src=(bio.avatar) alt=(author_name);
            }
            div.bio-text {
                (PreEscaped(bio_html))
            }
        }
    }
}

/// Renders the list of page links.
pub fn render_links(entries: &[LinkEntry]) -> Markup {
    html! {
        ul.writings {
            @for entry in entries {
                li data-key=(entry.key) {
                    a href=(entry.target) { (entry.label) }
                }
            }
        }
    }
}

/// Renders the complete index page.
pub fn render_index(entries: &[LinkEntry], config: &SiteConfig) -> Markup {
    let content = html! {
        (render_bio(&config.bio, &config.author_name))
        h4 { (config.heading) }
        (render_links(entries))
        @if !config.analytics.pixel_url.is_empty() {
            amp-pixel src=(config.analytics.pixel_url) {}
        }
    };

    base_document(config, content)
}

// ============================================================================
// Tests
// ============================================================================

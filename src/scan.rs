//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content directory, turns every
//! page file into a [`PageRecord`], and bundles the records with the site
//! configuration into a [`Manifest`] for the generate stage.
//!
//! ## Directory Structure
//!
//! ```text
//! pages/                               # Content root
//! ├── config.toml                      # Site configuration (optional)
//! ├── index.js                         # Page → "/"
//! ├── 404.md                           # Page → "/404/" (never listed)
//! ├── _template.html                   # Leading underscore: not a page
//! ├── 2015-05-01-hello-world/
//! │   ├── index.md                     # Page → "/2015-05-01-hello-world/"
//! │   └── salty_egg.jpg                # Not a page
//! └── notes/
//!     └── rust.md                      # Page → "/notes/rust/"
//! ```
//!
//! ## Page Paths
//!
//! A `path` key in the front matter wins. Otherwise the path follows the file
//! location: `index.<ext>` stands for its directory, any other file gets a
//! directory of its own named after the file stem.
//!
//! ## Front Matter
//!
//! Titles and dates are read from the YAML front matter of markdown and HTML
//! pages. Other page types are listed without either.

use crate::config::{self, CONFIG_FILE, SiteConfig};
use crate::frontmatter;
use crate::types::PageRecord;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Every page found, in walk order.
    #[serde(default)]
    pub pages: Vec<PageRecord>,
    #[serde(default)]
    pub config: SiteConfig,
}

/// Extensions of files that become pages.
pub const PAGE_EXTENSIONS: &[&str] = &["md", "html", "js", "jsx", "json", "toml", "yaml", "yml"];

/// Page types whose front matter is read.
const FRONT_MATTER_EXTENSIONS: &[&str] = &["md", "html"];

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let config = config::load_config(root)?;
    let files = collect_page_files(root)?;
    debug!("found {} page files under {}", files.len(), root.display());

    // Parsed in parallel; `collect` keeps walk order.
    let pages = files
        .par_iter()
        .map(|file| read_page(root, file))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest { pages, config })
}

/// Walk `root` and return page files in a stable, name-sorted order.
fn collect_page_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped_name(&e.file_name().to_string_lossy()));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if entry.depth() == 1 && entry.file_name() == CONFIG_FILE {
            continue;
        }
        if is_page_file(path) {
            files.push(path.to_path_buf());
        } else {
            debug!("skipping non-page file {}", path.display());
        }
    }
    Ok(files)
}

/// Hidden entries and `_`-prefixed templates are never pages.
fn is_skipped_name(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}

fn is_page_file(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| PAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_string())
}

fn read_page(root: &Path, file: &Path) -> Result<PageRecord, ScanError> {
    let rel = file.strip_prefix(root).unwrap_or(file);
    let ext = extension_of(file).unwrap_or_default();

    let front = if FRONT_MATTER_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
        let bytes = fs::read(file)?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!("{} is not valid UTF-8, invalid bytes replaced", rel.display());
        }
        frontmatter::parse(&content)
    } else {
        frontmatter::FrontMatter::default()
    };

    let path = front.path.unwrap_or_else(|| derive_path(rel));
    Ok(PageRecord {
        path,
        file_extension: ext,
        date: front.date,
        title: front.title,
        source: to_slash(rel),
    })
}

/// URL path for a file at `rel` (relative to the content root).
///
/// - `index.md` → `/`
/// - `blog/index.md` → `/blog/`
/// - `blog/first.md` → `/blog/first/`
pub fn derive_path(rel: &Path) -> String {
    let mut segments: Vec<String> = rel
        .parent()
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();

    let stem = rel
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if stem != "index" && !stem.is_empty() {
        segments.push(stem);
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

fn to_slash(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

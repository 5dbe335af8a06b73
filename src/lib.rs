//! # Writings
//!
//! A minimal static site generator for a blog index. Markdown files with YAML
//! front matter become entries in a date-sorted list of links, rendered under
//! an author bio on a single `index.html`.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      pages/    →  manifest.json   (filesystem → page records + config)
//! 2. Generate  manifest  →  public/         (ordered links → index.html)
//! ```
//!
//! The manifest between the stages is plain JSON, so the page records that
//! feed the index can be inspected (or hand-written) before generating.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content directory and produces the manifest |
//! | [`generate`] | Stage 2 — builds the index and renders it with Maud |
//! | [`index`] | Ordering and filtering of pages into index links |
//! | [`links`] | Link-prefix resolution for sub-path deployments |
//! | [`frontmatter`] | YAML front matter splitting and lenient field extraction |
//! | [`config`] | `config.toml` loading, merging over defaults, and validation |
//! | [`types`] | Shared types (`PageRecord`, `LinkEntry`) |
//! | [`output`] | CLI output formatting |
//!
//! # Index Order
//!
//! Pages are listed newest first, computed as "stable sort by date ascending,
//! then reverse". Undated pages therefore lead the list. See [`index`] for the
//! exact rules, including which pages are left out.

pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod index;
pub mod links;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Shared test utilities.
//!
//! Fixture setup plus manifest lookups that panic with a readable message
//! on a miss.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//! let hello = find_page(&manifest, "/2015-05-01-hello-world/");
//! assert_eq!(hello.title.as_deref(), Some("Hello World"));
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{LinkEntry, PageRecord};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_page(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a page by URL path. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, path: &str) -> &'a PageRecord {
    manifest
        .pages
        .iter()
        .find(|p| p.path == path)
        .unwrap_or_else(|| {
            let paths = page_paths(manifest);
            panic!("page '{path}' not found. Available: {paths:?}")
        })
}

/// All page paths in manifest order.
pub fn page_paths(manifest: &Manifest) -> Vec<&str> {
    manifest.pages.iter().map(|p| p.path.as_str()).collect()
}

/// All link keys in index order.
pub fn entry_keys(entries: &[LinkEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.key.as_str()).collect()
}

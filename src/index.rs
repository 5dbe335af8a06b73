//! Blog index construction.
//!
//! [`PageIndexBuilder::build`] turns the unordered page records from the scan
//! stage into the ordered list of links shown on the index page:
//!
//! 1. Stable sort by date, ascending, then reverse the whole sequence.
//! 2. Keep markdown pages (`md` extension) whose path does not contain `/404`.
//! 3. Label each link with the page title, or the path when the title is
//!    missing or empty.
//!
//! ## Ordering quirks
//!
//! Pages without a date sort *after* every dated page in the ascending pass,
//! so the reverse puts them at the very top of the index. Ties (equal dates,
//! or several undated pages) come out in reverse input order. Both fall out
//! of "sort ascending, then reverse" rather than from an explicit rule and
//! are kept so existing sites keep their ordering.
//!
//! Filtering runs after sorting. The result would be the same either way
//! because the predicate ignores position, but sorting the full set keeps
//! the sequence of operations stable if the predicate grows.

use crate::links::LinkResolver;
use crate::types::{LinkEntry, PageRecord};
use std::cmp::Ordering;

/// Only pages built from this source extension are listed.
pub const LISTED_EXTENSION: &str = "md";

/// Pages whose path contains this are never listed.
pub const NOT_FOUND_MARKER: &str = "/404";

/// Why a page was left out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Source is not a markdown file.
    NotMarkdown,
    /// Path contains `/404`.
    NotFoundPage,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Exclusion::NotMarkdown => write!(f, "not markdown"),
            Exclusion::NotFoundPage => write!(f, "404 page"),
        }
    }
}

/// Check a page against the inclusion predicate.
///
/// Returns `None` when the page belongs in the index.
pub fn exclusion(page: &PageRecord) -> Option<Exclusion> {
    if page.file_extension != LISTED_EXTENSION {
        Some(Exclusion::NotMarkdown)
    } else if page.path.contains(NOT_FOUND_MARKER) {
        Some(Exclusion::NotFoundPage)
    } else {
        None
    }
}

/// Ascending date order with undated pages after all dated ones.
fn date_order(a: &PageRecord, b: &PageRecord) -> Ordering {
    match (&a.date, &b.date) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Order pages for display: stable ascending sort by date, then reversed.
pub fn display_order(pages: &[PageRecord]) -> Vec<&PageRecord> {
    let mut sorted: Vec<&PageRecord> = pages.iter().collect();
    // `sort_by` is stable, which the tie behaviour depends on.
    sorted.sort_by(|a, b| date_order(a, b));
    sorted.reverse();
    sorted
}

/// Builds the ordered link list for the index page.
#[derive(Debug, Clone)]
pub struct PageIndexBuilder<R> {
    resolver: R,
}

impl<R: LinkResolver> PageIndexBuilder<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Build the index links for `pages`.
    ///
    /// Pure and total: missing fields fall back to defaults and an empty
    /// input yields an empty index.
    pub fn build(&self, pages: &[PageRecord]) -> Vec<LinkEntry> {
        display_order(pages)
            .into_iter()
            .filter(|page| exclusion(page).is_none())
            .map(|page| LinkEntry {
                key: page.path.clone(),
                label: page.label().to_string(),
                target: self.resolver.resolve(&page.path),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::LinkPrefix;
    use crate::test_helpers::entry_keys;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn md(path: &str, date: Option<i64>) -> PageRecord {
        let page = PageRecord::new(path, "md");
        match date {
            Some(d) => page.with_date(at(d)),
            None => page,
        }
    }

    fn builder() -> PageIndexBuilder<LinkPrefix> {
        PageIndexBuilder::new(LinkPrefix::default())
    }

    #[test]
    fn excludes_404_and_non_markdown() {
        let pages = vec![
            md("/a", Some(1)),
            md("/b", Some(2)),
            md("/404", Some(3)),
            PageRecord::new("/c", "txt").with_date(at(4)),
        ];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/b", "/a"]);
    }

    #[test]
    fn undated_page_listed_before_dated() {
        let pages = vec![md("/x", None), md("/y", Some(5))];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/x", "/y"]);
    }

    #[test]
    fn undated_page_precedes_earliest_dated() {
        let pages = vec![
            md("/old", Some(10)),
            md("/new", Some(30)),
            md("/undated", None),
            md("/mid", Some(20)),
        ];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/undated", "/new", "/mid", "/old"]);
    }

    #[test]
    fn newer_pages_come_first() {
        let pages = vec![md("/1", Some(100)), md("/3", Some(300)), md("/2", Some(200))];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/3", "/2", "/1"]);
    }

    #[test]
    fn equal_dates_come_out_in_reverse_input_order() {
        let pages = vec![md("/first", Some(7)), md("/second", Some(7)), md("/third", Some(7))];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/third", "/second", "/first"]);
    }

    #[test]
    fn undated_pages_come_out_in_reverse_input_order() {
        let pages = vec![md("/p", None), md("/q", Some(1)), md("/r", None)];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/r", "/p", "/q"]);
    }

    #[test]
    fn path_containing_404_anywhere_is_excluded() {
        let pages = vec![
            md("/errors/404/", Some(1)),
            md("/404-not-really/", Some(2)),
            md("/keep/", Some(3)),
        ];
        let entries = builder().build(&pages);
        assert_eq!(entry_keys(&entries), vec!["/keep/"]);
    }

    #[test]
    fn bare_404_without_slash_is_kept() {
        let pages = vec![md("404", Some(1))];
        assert_eq!(entry_keys(&builder().build(&pages)), vec!["404"]);
    }

    #[test]
    fn extension_match_is_exact() {
        let pages = vec![
            PageRecord::new("/upper/", "MD"),
            PageRecord::new("/long/", "markdown"),
            PageRecord::new("/empty/", ""),
            md("/kept/", None),
        ];
        assert_eq!(entry_keys(&builder().build(&pages)), vec!["/kept/"]);
    }

    #[test]
    fn labels_fall_back_to_path() {
        let pages = vec![
            md("/titled/", Some(3)).with_title("My Post"),
            md("/empty/", Some(2)).with_title(""),
            md("/untitled/", Some(1)),
        ];
        let entries = builder().build(&pages);
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["My Post", "/empty/", "/untitled/"]);
    }

    #[test]
    fn targets_go_through_resolver() {
        let pages = vec![md("/hello/", Some(1))];
        let entries = PageIndexBuilder::new(LinkPrefix::new("/blog")).build(&pages);
        assert_eq!(entries[0].key, "/hello/");
        assert_eq!(entries[0].target, "/blog/hello/");
    }

    #[test]
    fn closure_resolver() {
        let pages = vec![md("/hello/", Some(1))];
        let entries = PageIndexBuilder::new(|p: &str| format!("#{p}")).build(&pages);
        assert_eq!(entries[0].target, "#/hello/");
    }

    #[test]
    fn empty_input_yields_empty_index() {
        assert!(builder().build(&[]).is_empty());
    }

    #[test]
    fn output_length_matches_predicate_count() {
        let pages = vec![
            md("/a/", Some(1)),
            PageRecord::new("/b/", "js"),
            md("/404/", None),
            md("/c/", None),
            PageRecord::new("/d/", "html").with_date(at(9)),
        ];
        let expected = pages.iter().filter(|p| exclusion(p).is_none()).count();
        let entries = builder().build(&pages);
        assert_eq!(entries.len(), expected);
        assert!(entries.len() <= pages.len());
        assert_eq!(expected, 2);
    }

    #[test]
    fn build_is_idempotent() {
        let pages = vec![md("/a/", Some(2)), md("/b/", None), md("/c/", Some(2))];
        let b = builder();
        assert_eq!(b.build(&pages), b.build(&pages));
    }

    #[test]
    fn sorting_does_not_mutate_input() {
        let pages = vec![md("/a/", Some(1)), md("/b/", Some(2))];
        let before = pages.clone();
        builder().build(&pages);
        assert_eq!(pages, before);
    }

    #[test]
    fn exclusion_reasons() {
        assert_eq!(exclusion(&PageRecord::new("/x/", "js")), Some(Exclusion::NotMarkdown));
        assert_eq!(exclusion(&md("/404/", None)), Some(Exclusion::NotFoundPage));
        assert_eq!(exclusion(&md("/x/", None)), None);
    }

    #[test]
    fn display_order_includes_excluded_pages() {
        let pages = vec![PageRecord::new("/js/", "js").with_date(at(5)), md("/a/", Some(1))];
        let order: Vec<&str> = display_order(&pages).iter().map(|p| p.path.as_str()).collect();
        assert_eq!(order, vec!["/js/", "/a/"]);
    }
}

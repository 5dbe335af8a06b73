//! Shared types used across both pipeline stages.
//!
//! [`PageRecord`] is serialized into the scan manifest and read back by the
//! generate stage; [`LinkEntry`] is what the index builder hands to the
//! renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single page discovered in the content directory.
///
/// Only `path`, `file_extension`, `date` and `title` feed the index.
/// `source` is kept so CLI output can point back at the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    /// URL path of the page (`/hello-world/`).
    pub path: String,
    /// Source file extension without the dot, case preserved (`md`, `js`).
    #[serde(default)]
    pub file_extension: String,
    /// Publication date from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Title from front matter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Source file relative to the content root.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

impl PageRecord {
    pub fn new(path: impl Into<String>, file_extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_extension: file_extension.into(),
            date: None,
            title: None,
            source: String::new(),
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Display label: the title when it is present and non-empty, else the path.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.path,
        }
    }
}

/// A display-ready link to one page of the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Identity of the entry; always the page path.
    pub key: String,
    pub label: String,
    /// Deployable URL after link-prefix resolution.
    pub target: String,
}

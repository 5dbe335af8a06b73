//! YAML front matter extraction.
//!
//! Markdown and HTML pages may open with a YAML header:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2015-05-01T22:12:03.284Z
//! path: /hello-world/
//! ---
//!
//! Body text...
//! ```
//!
//! Parsing is deliberately forgiving. A broken header never fails the build;
//! the page simply ends up without a title or date and a warning is logged.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::warn;
use serde_yaml::{Mapping, Value};

/// Fields the site reads from a page header. Everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// Explicit URL path, overriding the one derived from the file location.
    pub path: Option<String>,
}

/// Split `content` into its front matter block and the remaining body.
///
/// The block must start on the first line with `---` and end at the next
/// line consisting solely of `---`. Without both delimiters the whole
/// content is body.
pub fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return (Some(header), body);
        }
        offset += line.len();
    }
    (None, content)
}

/// Parse the front matter of a page. Missing or malformed headers yield
/// [`FrontMatter::default`].
pub fn parse(content: &str) -> FrontMatter {
    let Some(header) = split(content).0 else {
        return FrontMatter::default();
    };
    if header.trim().is_empty() {
        return FrontMatter::default();
    }

    let mapping = match serde_yaml::from_str::<Value>(header) {
        Ok(Value::Mapping(mapping)) => mapping,
        Ok(_) => {
            warn!("front matter is not a key/value mapping, ignoring it");
            return FrontMatter::default();
        }
        Err(e) => {
            warn!("error parsing front matter: {e}");
            return FrontMatter::default();
        }
    };

    FrontMatter {
        title: title(&mapping),
        date: scalar(&mapping, "date").and_then(|raw| {
            let parsed = parse_date(&raw);
            if parsed.is_none() {
                warn!("unrecognized date {raw:?}, treating page as undated");
            }
            parsed
        }),
        path: scalar(&mapping, "path").filter(|p| !p.trim().is_empty()),
    }
}

/// The page title. `false` and zero count as no title, so the link label
/// falls back to the page path.
fn title(mapping: &Mapping) -> Option<String> {
    match mapping.get("title")? {
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        _ => scalar(mapping, "title"),
    }
}

/// Read `key` as a string, accepting any YAML scalar.
fn scalar(mapping: &Mapping, key: &str) -> Option<String> {
    match mapping.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Parse a front matter date.
///
/// Accepts RFC 3339 (`2015-05-01T22:12:03.284Z`), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD`. Dates without an offset are
/// taken as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

//! Link-prefix resolution.
//!
//! Sites deployed under a sub-path (`https://example.com/blog/`) need every
//! internal link prefixed. [`LinkPrefix`] applies the configured prefix;
//! anything implementing [`LinkResolver`] can stand in for it.

/// Maps a raw page path to a deployable URL.
pub trait LinkResolver {
    fn resolve(&self, path: &str) -> String;
}

impl<F> LinkResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, path: &str) -> String {
        self(path)
    }
}

/// Prefixes page paths with the site's base path.
///
/// An empty prefix leaves paths untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPrefix {
    prefix: String,
}

impl LinkPrefix {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl LinkResolver for LinkPrefix {
    fn resolve(&self, path: &str) -> String {
        if self.prefix.is_empty() {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.prefix, path)
        } else {
            format!("{}/{}", self.prefix, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prefix_is_identity() {
        let links = LinkPrefix::new("");
        assert!(links.is_empty());
        assert_eq!(links.resolve("/hello/"), "/hello/");
        assert_eq!(links.resolve("hello"), "hello");
    }

    #[test]
    fn prefix_joins_absolute_path() {
        assert_eq!(LinkPrefix::new("/blog").resolve("/hello/"), "/blog/hello/");
    }

    #[test]
    fn trailing_slash_on_prefix_not_doubled() {
        assert_eq!(LinkPrefix::new("/blog/").resolve("/hello/"), "/blog/hello/");
    }

    #[test]
    fn relative_path_gets_separator() {
        assert_eq!(LinkPrefix::new("/blog").resolve("hello/"), "/blog/hello/");
    }

    #[test]
    fn root_path_under_prefix() {
        assert_eq!(LinkPrefix::new("/blog").resolve("/"), "/blog/");
    }

    #[test]
    fn absolute_url_prefix() {
        let links = LinkPrefix::new("https://example.com/blog");
        assert_eq!(links.resolve("/a/"), "https://example.com/blog/a/");
    }

    #[test]
    fn closures_resolve() {
        let upper = |p: &str| p.to_uppercase();
        assert_eq!(upper.resolve("/a/"), "/A/");
    }
}

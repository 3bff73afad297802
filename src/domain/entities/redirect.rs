//! Redirect record: the only persisted entity.

/// A short path mapped to its destination and usage counter.
///
/// Records are created out of band (see the `admin` binary). The resolver only
/// reads them and writes them back with an incremented `hit_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRecord {
    pub short_path: String,
    /// Destination as stored. May lack a URI scheme.
    pub url: String,
    pub hit_count: i64,
}

impl RedirectRecord {
    /// Creates a new RedirectRecord instance.
    pub fn new(short_path: impl Into<String>, url: impl Into<String>, hit_count: i64) -> Self {
        Self {
            short_path: short_path.into(),
            url: url.into(),
            hit_count,
        }
    }

    /// Returns the record as it must be written back after a successful lookup.
    ///
    /// `short_path` and `url` are carried over unchanged.
    pub fn hit(&self) -> Self {
        Self {
            short_path: self.short_path.clone(),
            url: self.url.clone(),
            hit_count: self.hit_count.saturating_add(1),
        }
    }

    /// Destination to put in the `Location` header.
    ///
    /// Anything not starting with `http` gets `https://` prepended, so
    /// `example.com` becomes `https://example.com` while `http://example.com`
    /// is left alone.
    pub fn location(&self) -> String {
        if self.url.starts_with("http") {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = RedirectRecord::new("gh", "github.com/someone", 7);

        assert_eq!(record.short_path, "gh");
        assert_eq!(record.url, "github.com/someone");
        assert_eq!(record.hit_count, 7);
    }

    #[test]
    fn test_hit_increments_by_one() {
        let record = RedirectRecord::new("gh", "github.com", 0);
        let once = record.hit();
        let twice = once.hit();

        assert_eq!(once.hit_count, 1);
        assert_eq!(twice.hit_count, 2);
        assert_eq!(twice.short_path, "gh");
        assert_eq!(twice.url, "github.com");
    }

    #[test]
    fn test_hit_does_not_overflow() {
        let record = RedirectRecord::new("max", "example.com", i64::MAX);
        assert_eq!(record.hit().hit_count, i64::MAX);
    }

    #[test]
    fn test_location_adds_scheme() {
        let record = RedirectRecord::new("ex", "example.com", 0);
        assert_eq!(record.location(), "https://example.com");
    }

    #[test]
    fn test_location_keeps_existing_scheme() {
        let http = RedirectRecord::new("ex", "http://example.com", 0);
        let https = RedirectRecord::new("ex", "https://example.com/a?b=c", 0);

        assert_eq!(http.location(), "http://example.com");
        assert_eq!(https.location(), "https://example.com/a?b=c");
    }

    #[test]
    fn test_location_prefix_check_is_literal() {
        // Only the literal `http` prefix counts; other schemes are treated as hosts.
        let ftp = RedirectRecord::new("f", "ftp://example.com", 0);
        let upper = RedirectRecord::new("u", "HTTP://example.com", 0);
        let httpbin = RedirectRecord::new("h", "httpbin.org/get", 0);

        assert_eq!(ftp.location(), "https://ftp://example.com");
        assert_eq!(upper.location(), "https://HTTP://example.com");
        assert_eq!(httpbin.location(), "httpbin.org/get");
    }
}

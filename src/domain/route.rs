//! Routing decisions and redirect targets.
//!
//! Pure functions only: deciding where a short path goes never touches the store.
//! The store lookup itself lives in [`crate::application::services::RedirectService`].

use crate::domain::entities::RedirectRecord;

/// Destination when no short path was supplied.
pub const DEFAULT_PAGE: &str = "https://www.google.co.uk";

/// Search fallback for unknown short paths; the path is appended verbatim.
pub const SEARCH_URL: &str = "https://www.google.co.uk/search?q=";

/// Status-image service; the status token is appended verbatim.
pub const STATUS_CAT_URL: &str = "https://http.cat/status/";

/// Prefix routing a short path to the status-image service.
pub const STATUS_CAT_PREFIX: &str = "cat";

/// Where a request should go before consulting the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route<'a> {
    Default,
    StatusCat { code: &'a str },
    Lookup { path: &'a str },
}

impl<'a> Route<'a> {
    /// Classifies an extracted short path.
    ///
    /// `cat` followed by at least one character goes to the status-image
    /// service. A bare `cat` is an ordinary store lookup.
    pub fn classify(short_path: Option<&'a str>) -> Self {
        let Some(path) = short_path else {
            return Route::Default;
        };

        match path.strip_prefix(STATUS_CAT_PREFIX) {
            Some(code) if !code.is_empty() => Route::StatusCat { code },
            _ => Route::Lookup { path },
        }
    }
}

/// Outcome of resolving a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No short path supplied.
    Default,
    /// `cat<code>` short path.
    StatusCat { code: String },
    /// Store hit. Holds the record as written back (counter already bumped).
    Hit { record: RedirectRecord },
    /// Store miss.
    Miss { path: String },
}

impl Resolution {
    /// Renders the `Location` header value.
    pub fn location(&self) -> String {
        match self {
            Resolution::Default => DEFAULT_PAGE.to_string(),
            Resolution::StatusCat { code } => format!("{STATUS_CAT_URL}{code}"),
            Resolution::Hit { record } => record.location(),
            Resolution::Miss { path } => format!("{SEARCH_URL}{path}"),
        }
    }
}

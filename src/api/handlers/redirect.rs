//! Handlers for short path redirects.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::request::{PathParameters, RedirectRequest};
use crate::domain::route::Resolution;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short path to its destination.
///
/// # Endpoint
///
/// `GET /{*shortPath}`
///
/// The capture is greedy, so `/docs/intro` resolves the short path `docs/intro`.
///
/// # Targets
///
/// | Short path            | Location                                  |
/// |-----------------------|-------------------------------------------|
/// | `cat<code>`           | `https://http.cat/status/<code>`          |
/// | stored, no scheme     | `https://<url>`                           |
/// | stored, with scheme   | `<url>`                                   |
/// | unknown               | `https://www.google.co.uk/search?q=<path>`|
///
/// A hit increments the record's counter before responding.
///
/// A path that cannot be extracted (percent-decodes to invalid UTF-8) is
/// treated as having no short path and redirects to the default page.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the store fails.
pub async fn redirect_handler(
    params: Result<Path<PathParameters>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let request = match params {
        Ok(Path(params)) => RedirectRequest {
            path_parameters: Some(params),
        },
        Err(rejection) => {
            warn!("Unreadable short path ({}), using default page", rejection.body_text());
            RedirectRequest::empty()
        }
    };

    resolve(&state, &request).await
}

/// Redirects to the default page.
///
/// # Endpoint
///
/// `GET /`
///
/// No path parameters are captured, so this never touches the store.
pub async fn root_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    resolve(&state, &RedirectRequest::empty()).await
}

async fn resolve(state: &AppState, request: &RedirectRequest) -> Result<Response, AppError> {
    let resolution = state.redirect_service.resolve(request).await?;
    Ok(moved_permanently(&resolution))
}

/// Builds the `301 Moved Permanently` response for a resolution.
///
/// A target that is not a valid header value (control characters in the short
/// path) degrades to the default page.
fn moved_permanently(resolution: &Resolution) -> Response {
    let location = resolution.location();

    let value = HeaderValue::from_bytes(location.as_bytes()).unwrap_or_else(|_| {
        warn!("Location {:?} is not a valid header value, using default page", location);
        HeaderValue::from_static(crate::domain::route::DEFAULT_PAGE)
    });

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, value)]).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RedirectRecord;

    #[test]
    fn test_moved_permanently() {
        let response = moved_permanently(&Resolution::Hit {
            record: RedirectRecord::new("ex", "example.com", 1),
        });

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_invalid_location_falls_back_to_default() {
        let response = moved_permanently(&Resolution::Miss {
            path: "bad\nvalue".to_string(),
        });

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://www.google.co.uk"
        );
    }
}

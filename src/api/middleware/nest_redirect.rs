//! Redirect fixing for services nested under a path prefix.

use axum::{
    extract::{OriginalUri, Request},
    http::{HeaderValue, header::LOCATION},
    middleware::Next,
    response::Response,
};

/// Rewrites `Location` on redirects from a nested service so it keeps the
/// nest prefix.
///
/// `ServeDir` redirects `/docs` to `/docs/` based on the path it sees, which
/// has the prefix stripped. Behind `/app` that would send clients to
/// `/docs/`. The rewritten location is the original request path with a
/// trailing slash, plus the original query.
///
/// # Example
///
/// ```rust,ignore
/// let files = middleware::from_fn(nest_redirect::layer).layer(ServeDir::new("static"));
/// let app = Router::new().nest_service("/app", files);
/// ```
pub async fn layer(OriginalUri(original): OriginalUri, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;

    if !response.status().is_redirection() || !response.headers().contains_key(LOCATION) {
        return response;
    }

    let mut location = original.path().trim_end_matches('/').to_string();
    location.push('/');
    if let Some(query) = original.query() {
        location.push('?');
        location.push_str(query);
    }

    match HeaderValue::from_str(&location) {
        Ok(value) => {
            response.headers_mut().insert(LOCATION, value);
        }
        Err(e) => tracing::warn!(error = %e, %location, "Could not rewrite redirect location"),
    }

    response
}

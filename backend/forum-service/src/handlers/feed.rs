use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FeedQueryParams {
    pub page: Option<String>,
}

impl FeedQueryParams {
    /// Parse the query string, treating an unreadable one as empty
    pub fn from_request(req: &HttpRequest) -> Self {
        web::Query::<Self>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_default()
    }

    /// Requested page number
    ///
    /// Absent, negative and non-numeric values all mean page 0. This is a
    /// deliberate leniency of the feed endpoint, not a validation gap.
    pub fn requested_page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.parse::<u64>().ok())
            .unwrap_or(0)
    }
}

/// GET / - render the feed page
pub async fn get_index(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let page = FeedQueryParams::from_request(&req).requested_page();
    info!(page, "Getting index");

    let posts = state.feed.list(page).await?;
    let html = state.templates.render_index(&posts, page)?;

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn page_for(uri: &str) -> u64 {
        let req = TestRequest::get().uri(uri).to_http_request();
        FeedQueryParams::from_request(&req).requested_page()
    }

    #[test]
    fn test_missing_page_defaults_to_zero() {
        assert_eq!(page_for("/"), 0);
        assert_eq!(page_for("/?other=1"), 0);
    }

    #[test]
    fn test_numeric_page_is_used() {
        assert_eq!(page_for("/?page=3"), 3);
    }

    #[test]
    fn test_unparseable_page_defaults_to_zero() {
        assert_eq!(page_for("/?page=abc"), 0);
        assert_eq!(page_for("/?page="), 0);
        assert_eq!(page_for("/?page=-2"), 0);
        assert_eq!(page_for("/?page=99999999999999999999999"), 0);
    }
}

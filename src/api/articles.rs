//! Article Endpoints

use reqwest::StatusCode;

use super::{ApiClient, ApiError, ApiResult, Operation, RawResponse};
use crate::models::{Article, ArticleId, NewArticle};

impl ApiClient {
    /// `GET /search?q=` - results in server order
    pub async fn search_articles(&self, query: &str) -> ApiResult<Vec<Article>> {
        tracing::debug!(query, "searching articles");
        let request = self.http.get(self.url("/search")).query(&[("q", query)]);
        read_search(self.send(request).await?)
    }

    /// `POST /posts` - id and `created_at` come from the server
    pub async fn create_article(&self, article: &NewArticle) -> ApiResult<Article> {
        tracing::debug!("creating article");
        let request = self.http.post(self.url("/posts")).json(article);
        read_created(self.send(request).await?)
    }

    /// `GET /posts/{id}`
    pub async fn get_article(&self, id: ArticleId) -> ApiResult<Article> {
        tracing::debug!(id, "loading article");
        let request = self.http.get(self.url(&format!("/posts/{}", id)));
        read_article(self.send(request).await?)
    }
}

fn read_search(raw: RawResponse) -> ApiResult<Vec<Article>> {
    raw.json(Operation::Search)
}

fn read_created(raw: RawResponse) -> ApiResult<Article> {
    raw.json(Operation::Create)
}

fn read_article(raw: RawResponse) -> ApiResult<Article> {
    if raw.status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    raw.json(Operation::Fetch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::raw;

    const RUST_ARTICLES: &str = r#"[
        {"id":3,"title":"Rust async","content":"...","created_at":"2024-02-01T09:00:00+08:00"},
        {"id":1,"title":"Intro to Rust","content":"...","created_at":"2024-01-01T10:00:00Z"}
    ]"#;

    #[test]
    fn test_search_keeps_server_order() {
        let articles = read_search(raw(200, RUST_ARTICLES)).unwrap();
        let ids: Vec<_> = articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_search_failure_carries_status_text() {
        let body = r#"{"detail":"Query parameter 'q' is required"}"#;
        let err = read_search(raw(400, body)).unwrap_err();
        assert_eq!(err.to_string(), "search failed: Bad Request");
    }

    #[test]
    fn test_search_404_is_generic_failure() {
        let err = read_search(raw(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
    }

    #[test]
    fn test_created_article_comes_from_response() {
        let body = r#"{"id":42,"title":"New","content":"Body","created_at":"2024-05-05T12:00:00+08:00"}"#;
        let article = read_created(raw(201, body)).unwrap();
        assert_eq!(article.id, 42);
        assert_eq!(article.created_at.to_rfc3339(), "2024-05-05T12:00:00+08:00");
    }

    #[test]
    fn test_missing_article_is_not_found() {
        let err = read_article(raw(404, r#"{"detail":"Article not found"}"#)).unwrap_err();
        assert_eq!(err, ApiError::NotFound);
        assert_eq!(err.to_string(), "article does not exist");
    }

    #[test]
    fn test_article_server_error_is_generic() {
        let err = read_article(raw(503, "")).unwrap_err();
        assert_eq!(err.to_string(), "load article failed: Service Unavailable");
    }
}

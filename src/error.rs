//! Errors surfaced to HTTP clients

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::io;
use thiserror::Error;

use crate::content::ReadError;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid post slug")]
    InvalidSlug,
    #[error("post not found")]
    NotFound,
    #[error("could not read posts directory: {0}")]
    ListPosts(#[source] io::Error),
    #[error("could not read post: {0}")]
    ReadPost(#[source] io::Error),
    #[error("rendering failed: {0}")]
    Render(String),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidSlug => StatusCode::BAD_REQUEST,
            PageError::NotFound => StatusCode::NOT_FOUND,
            PageError::ListPosts(_) | PageError::ReadPost(_) | PageError::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short text shown to the client; details only go to the log
    fn public_message(&self) -> &'static str {
        match self {
            PageError::InvalidSlug => "Invalid post slug",
            PageError::NotFound => "Post not found",
            PageError::ListPosts(_) => "Could not read posts",
            PageError::ReadPost(_) => "Error reading post",
            PageError::Render(_) => "Error rendering page",
        }
    }
}

impl From<ReadError> for PageError {
    fn from(e: ReadError) -> Self {
        match e {
            ReadError::NotFound => PageError::NotFound,
            ReadError::Io(e) => PageError::ReadPost(e),
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(e: anyhow::Error) -> Self {
        PageError::Render(format!("{:#}", e))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }
        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PageError::InvalidSlug.status(), StatusCode::BAD_REQUEST);
        assert_eq!(PageError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            PageError::Render("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_read_error_mapping() {
        assert!(matches!(
            PageError::from(ReadError::NotFound),
            PageError::NotFound
        ));
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            PageError::from(ReadError::Io(io)),
            PageError::ReadPost(_)
        ));
    }

    #[tokio::test]
    async fn test_response_hides_details() {
        let response = PageError::Render("template exploded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(body, "Error rendering page");
        assert!(!body.contains("template exploded"));
    }
}

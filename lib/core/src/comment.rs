use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use inkline_utils::errors::AppError;

#[cfg(feature = "ssr")]
use crate::config::ssr::{get_comments_endpoint, get_http_client};

const COMMENT_DATE_FORMAT: &str = "%b %-d, %Y";

/// A single comment as returned by the comments endpoint. `created_at` stays
/// the ISO string from the wire; [`Comment::formatted_date`] renders it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub author_name: String,
    pub comment_text: String,
    pub created_at: String,
}

impl Comment {
    pub fn formatted_date(&self) -> String {
        format_created_at(&self.created_at)
    }
}

/// Body of a comment create request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub article_id: i64,
    pub author_name: String,
    pub author_email: String,
    pub comment_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
}

/// Checks that all required comment fields are non-empty after trimming.
/// Runs in the browser before a request is issued, and again in the server
/// function.
pub fn validate_comment_fields(
    author_name: &str,
    author_email: &str,
    comment_text: &str,
) -> Result<(), AppError> {
    if author_name.trim().is_empty()
        || author_email.trim().is_empty()
        || comment_text.trim().is_empty()
    {
        return Err(AppError::invalid_input("All comment fields are required."));
    }
    Ok(())
}

/// Renders an ISO timestamp string as a short date. Unparseable input is
/// passed through unchanged.
pub fn format_created_at(created_at: &str) -> String {
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(created_at) {
        return timestamp.format(COMMENT_DATE_FORMAT).to_string();
    }
    if let Ok(timestamp) = chrono::NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format(COMMENT_DATE_FORMAT).to_string();
    }
    String::from(created_at)
}

#[cfg(feature = "ssr")]
pub mod ssr {
    use reqwest::Client;
    use url::Url;

    use inkline_utils::errors::AppError;

    use super::*;

    /// Reads the comments of one article from the endpoint:
    /// `GET {endpoint}?article_id={id}` answering `{ "comments": [...] }`.
    /// Ordering is whatever the endpoint returns.
    pub async fn fetch_article_comments(
        endpoint: &Url,
        article_id: i64,
        client: &Client,
    ) -> Result<Vec<Comment>, AppError> {
        let response = client
            .get(endpoint.clone())
            .query(&[("article_id", article_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let comment_list = response.json::<CommentListResponse>().await?;

        Ok(comment_list.comments)
    }

    /// Creates a comment: `POST {endpoint}` with the [`NewComment`] JSON
    /// body. Any success status counts as created, the body is not
    /// inspected.
    pub async fn create_comment(
        endpoint: &Url,
        new_comment: &NewComment,
        client: &Client,
    ) -> Result<(), AppError> {
        let response = client
            .post(endpoint.clone())
            .json(new_comment)
            .send()
            .await?;

        let status = response.status();
        match status.is_success() {
            true => Ok(()),
            false => Err(AppError::UpstreamStatus(status.as_u16())),
        }
    }
}

#[server]
pub async fn get_article_comments(
    article_id: i64,
) -> Result<Vec<Comment>, AppError> {
    log::trace!("Load comments for article {article_id}");
    let client = get_http_client()?;
    let endpoint = get_comments_endpoint()?;

    ssr::fetch_article_comments(&endpoint, article_id, &client).await
}

#[server]
pub async fn submit_comment(
    article_id: i64,
    author_name: String,
    author_email: String,
    comment_text: String,
) -> Result<(), AppError> {
    log::trace!("Submit comment for article {article_id}");
    validate_comment_fields(&author_name, &author_email, &comment_text)?;
    let client = get_http_client()?;
    let endpoint = get_comments_endpoint()?;

    let new_comment = NewComment {
        article_id,
        author_name,
        author_email,
        comment_text,
    };

    ssr::create_comment(&endpoint, &new_comment, &client).await
}

#[cfg(test)]
mod tests {
    use crate::comment::{format_created_at, validate_comment_fields, Comment, CommentListResponse, NewComment};
    use inkline_utils::errors::AppError;

    #[test]
    fn test_validate_comment_fields() {
        assert!(validate_comment_fields("Ann", "a@x.com", "Nice!").is_ok());
        assert!(matches!(validate_comment_fields("", "a@x.com", "Nice!"), Err(AppError::InvalidInput(_))));
        assert!(matches!(validate_comment_fields("Ann", "", "Nice!"), Err(AppError::InvalidInput(_))));
        assert!(matches!(validate_comment_fields("Ann", "a@x.com", ""), Err(AppError::InvalidInput(_))));
        // whitespace-only fields do not count as filled
        assert!(validate_comment_fields("  ", "a@x.com", "Nice!").is_err());
        assert!(validate_comment_fields("Ann", "a@x.com", "\n\t").is_err());
    }

    #[test]
    fn test_new_comment_wire_body() {
        let new_comment = NewComment {
            article_id: 1,
            author_name: String::from("Ann"),
            author_email: String::from("a@x.com"),
            comment_text: String::from("Nice!"),
        };
        let body = serde_json::to_string(&new_comment).expect("NewComment should serialize");
        assert_eq!(
            body,
            r#"{"article_id":1,"author_name":"Ann","author_email":"a@x.com","comment_text":"Nice!"}"#
        );
    }

    #[test]
    fn test_comment_list_response_decoding() {
        let empty: CommentListResponse =
            serde_json::from_str(r#"{"comments":[]}"#).expect("Empty list should decode");
        assert!(empty.comments.is_empty());

        // the endpoint includes fields the client does not consume
        let list: CommentListResponse = serde_json::from_str(
            r#"{"comments":[{"id":7,"article_id":1,"author_name":"Ann","comment_text":"Nice!","created_at":"2024-10-15T12:30:00"}]}"#,
        ).expect("List should decode");
        assert_eq!(list.comments.len(), 1);
        assert_eq!(
            list.comments[0],
            Comment {
                id: 7,
                author_name: String::from("Ann"),
                comment_text: String::from("Nice!"),
                created_at: String::from("2024-10-15T12:30:00"),
            }
        );
    }

    #[test]
    fn test_format_created_at() {
        assert_eq!(format_created_at("2024-10-15T12:30:00"), "Oct 15, 2024");
        assert_eq!(format_created_at("2024-10-05T00:00:00.123456"), "Oct 5, 2024");
        assert_eq!(format_created_at("2024-10-15T12:30:00+00:00"), "Oct 15, 2024");
        assert_eq!(format_created_at("2024-10-15T12:30:00Z"), "Oct 15, 2024");
        // unparseable input passes through
        assert_eq!(format_created_at("yesterday"), "yesterday");
        assert_eq!(format_created_at(""), "");
    }

    #[test]
    fn test_comment_formatted_date() {
        let comment = Comment {
            id: 1,
            author_name: String::from("Ann"),
            comment_text: String::from("Nice!"),
            created_at: String::from("2024-01-02T03:04:05"),
        };
        assert_eq!(comment.formatted_date(), "Jan 2, 2024");
    }
}

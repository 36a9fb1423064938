use serde::Deserialize;
use validator::Validate;

use crate::posts::errors::PostsApiError;

use super::NOT_BLANK_REGEX;

pub const FORBIDDEN_TITLE_WORD: &str = "바보";

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostDto {
    #[validate(
        required(message = "Please enter a title."),
        regex(path = "NOT_BLANK_REGEX", message = "Please enter a title.")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Please enter content."),
        regex(path = "NOT_BLANK_REGEX", message = "Please enter content.")
    )]
    pub content: Option<String>,
}

impl CreatePostDto {
    /// Domain rules, checked once the structural validation has passed.
    pub fn validate_title(&self) -> Result<(), PostsApiError> {
        let Some(title) = &self.title
        else {
            return Ok(());
        };

        if title.contains(FORBIDDEN_TITLE_WORD) {
            return Err(PostsApiError::InvalidRequest {
                field: "title",
                message: "Title cannot contain \"바보\".",
            });
        }

        Ok(())
    }
}

use axum::http::StatusCode;
use serde::Deserialize;

use crate::{app::models::api_error::ApiError, posts::enums::sort_order::SortOrder};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 2000;

#[derive(Debug, Default, Deserialize)]
pub struct GetPostsFilterDto {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub order: Option<String>,
}

impl GetPostsFilterDto {
    pub fn limit(&self) -> i64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE) as i64
    }

    /// Pages are 1-based; page 0 is treated as page 1.
    pub fn offset(&self) -> i64 {
        let page = self.page.unwrap_or(1).max(1) as i64;
        (page - 1) * self.limit()
    }

    pub fn sort_order(&self) -> Result<SortOrder, ApiError> {
        let Some(order) = &self.order
        else {
            return Ok(SortOrder::default());
        };

        match SortOrder::parse(order) {
            Some(sort_order) => Ok(sort_order),
            None => Err(ApiError::new(
                StatusCode::BAD_REQUEST,
                "Malformed sort query.",
            )),
        }
    }
}

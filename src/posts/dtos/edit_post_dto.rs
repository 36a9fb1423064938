use serde::Deserialize;

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct EditPostDto {
    pub title: Option<String>,
    pub content: Option<String>,
}

use crate::posts::dtos::edit_post_dto::EditPostDto;

/// Snapshot of the editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEditor {
    pub title: String,
    pub content: Option<String>,
}

impl PostEditor {
    /// Fields present in `dto` win, absent ones keep the snapshot value.
    pub fn merge(self, dto: &EditPostDto) -> Self {
        Self {
            title: dto.title.to_owned().unwrap_or(self.title),
            content: dto.content.to_owned().or(self.content),
        }
    }
}

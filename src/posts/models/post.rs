use sqlx::FromRow;

use crate::posts::dtos::create_post_dto::CreatePostDto;

use super::post_editor::PostEditor;

#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
}

impl Post {
    pub fn to_editor(&self) -> PostEditor {
        PostEditor {
            title: self.title.to_string(),
            content: self.content.to_owned(),
        }
    }

    /// Replaces the editable fields, keeping the id.
    pub fn edit(self, editor: PostEditor) -> Self {
        Self {
            id: self.id,
            title: editor.title,
            content: editor.content,
        }
    }
}

/// A post that has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
}

impl NewPost {
    pub fn new(dto: &CreatePostDto) -> Self {
        Self {
            title: dto.title.to_owned().unwrap_or_default(),
            content: dto.content.to_owned(),
        }
    }
}

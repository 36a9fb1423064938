pub mod post;
pub mod post_editor;
pub mod post_response;

use regex::Regex;

pub mod create_post_dto;
pub mod edit_post_dto;
pub mod get_posts_filter_dto;

lazy_static! {
    pub static ref NOT_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

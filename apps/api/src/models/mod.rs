pub mod content;
pub mod post;

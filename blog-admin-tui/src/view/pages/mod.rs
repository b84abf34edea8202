pub mod dashboard;
pub mod post;
pub mod update_post;

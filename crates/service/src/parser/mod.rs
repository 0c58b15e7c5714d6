pub mod member_type;
pub mod post;
pub mod profile;
pub mod user;

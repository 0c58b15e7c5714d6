pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod users;

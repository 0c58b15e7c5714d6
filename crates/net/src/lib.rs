pub mod config;
pub mod error;
pub mod extract;
pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod router;
pub mod server;
pub mod users;

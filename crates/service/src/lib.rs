pub mod error;
pub mod ops;
pub mod parser;
pub mod store;
pub mod validate;

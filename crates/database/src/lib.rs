pub mod basic_db;
pub mod table;

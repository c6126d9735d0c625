pub mod config;
pub mod data;
pub mod error;
pub mod form;
pub mod list;
pub mod logger;

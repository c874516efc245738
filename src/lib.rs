pub mod dto;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;
pub mod validation;

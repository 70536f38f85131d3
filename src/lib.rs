pub mod aggregate;
pub mod engine;
pub mod filter;
pub mod models;
pub mod storage;
pub mod types;

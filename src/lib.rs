pub mod api;
pub mod audit;
pub mod config;
pub mod errors;
pub mod llm;
pub mod models;
pub mod storage;

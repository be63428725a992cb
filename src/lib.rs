pub mod api;
pub mod config;
pub mod db;
pub mod llm;
pub mod models;
pub mod pipeline;

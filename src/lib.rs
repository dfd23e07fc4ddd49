pub mod config;
pub mod error;
pub mod gemini;
pub mod generator;
pub mod gif;
pub mod handlers;
pub mod keywords;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod selector;
pub mod state;

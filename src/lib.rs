pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod github;
pub mod models;
pub mod report;
pub mod stats;
pub mod types;

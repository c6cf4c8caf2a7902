pub mod client;
pub mod config;
pub mod duration;
pub mod error;
pub mod months;
pub mod pipeline;
pub mod report;
pub mod summary;
pub mod types;

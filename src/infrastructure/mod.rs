// Infrastructure layer - Settings and process-level adapters
pub mod config;
pub mod logging;

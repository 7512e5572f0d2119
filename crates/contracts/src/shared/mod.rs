pub mod config;
pub mod envelope;
pub mod format;
pub mod view_models;

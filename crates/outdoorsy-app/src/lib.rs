//! Application service layer - use cases, config, store access

pub mod app;
pub mod config;
pub mod repository;

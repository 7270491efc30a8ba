//! Domain layer: record normalization, ordering rules, repository traits

pub mod repository;
pub mod service;

//! Configuration and the typed values extracted from an interaction

pub mod config;
pub mod models;

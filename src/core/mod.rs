//! Configuration and the data types shared across the crate

pub mod config;
pub mod models;

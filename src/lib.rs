// src/lib.rs
//! Prompt documents for image-generation backends and the exporter that
//! writes them as `$schema`-tagged JSON.
pub mod errors;
pub mod example;
pub mod models;
pub mod numbers;
pub mod resolution;
pub mod services;
pub mod vocab;

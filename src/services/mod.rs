// src/services/mod.rs
pub mod advisor;
pub mod serializer;

pub use advisor::{Advisory, advisories};
pub use serializer::{DEFAULT_OUTPUT, PromptSerializer, SCHEMA_URL, SchemaTagged, decode, export, read};

//! Common types shared by aggregates

pub mod entity_metadata;

pub use entity_metadata::EntityMetadata;

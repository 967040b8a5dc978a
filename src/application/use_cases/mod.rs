//! Use Cases

pub mod discover_shards;
pub mod import_shards;
pub mod resolve_dataset;
pub mod split_source;

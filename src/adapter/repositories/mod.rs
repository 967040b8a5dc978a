//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod fs_shard_repository;
pub mod gzip_shard_splitter;
pub mod http_dataset_repository;
pub mod http_import_repository;

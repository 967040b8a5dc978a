//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ShardFile**: アップロード候補となるローカルのシャードファイル
//! - **DatasetRef**: 解決済みのリモートデータセット参照
//! - **SplitPlan / SplitSummary**: シャード分割のパラメータと結果

pub mod dataset_ref;
pub mod shard_file;
pub mod split_plan;

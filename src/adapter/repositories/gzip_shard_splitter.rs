//! Gzip Shard Splitter Implementation
//!
//! ShardSplitterのgzip実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::domain::entities::split_plan::{SplitPlan, SplitSummary};
use crate::domain::error::UploadError;
use crate::domain::repositories::shard_splitter::ShardSplitter;
use crate::domain::services::statement_filter::is_statement_line;

/// gzipベースのシャード分割
pub struct GzipShardSplitter;

impl GzipShardSplitter {
    /// 新しい分割器を作成
    pub fn new() -> Self {
        Self
    }

    /// 入力を開く。`.gz`なら展開しながら読む。
    fn open_input(input: &Path) -> Result<Box<dyn BufRead + Send>> {
        let file = File::open(input).map_err(|e| {
            UploadError::Filesystem(format!("cannot read {}: {}", input.display(), e))
        })?;

        if input.extension().and_then(|s| s.to_str()) == Some("gz") {
            let decoder: Box<dyn Read + Send> = Box::new(GzDecoder::new(file));
            Ok(Box::new(BufReader::new(decoder)))
        } else {
            Ok(Box::new(BufReader::new(file)))
        }
    }

    fn open_shard(path: &Path) -> Result<BufWriter<GzEncoder<File>>> {
        let file = File::create(path)
            .with_context(|| format!("cannot create shard {}", path.display()))?;
        Ok(BufWriter::new(GzEncoder::new(file, Compression::default())))
    }

    fn finish_shard(writer: BufWriter<GzEncoder<File>>, index: u32, lines: u64) -> Result<()> {
        let encoder = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush shard {:04}: {}", index, e))?;
        encoder
            .finish()
            .with_context(|| format!("failed to finalize shard {:04}", index))?;
        println!("Shard {:04} done ({} statements)", index, lines);
        Ok(())
    }

    /// 分割の内部実装（同期I/O）
    fn split_internal(input: &Path, plan: &SplitPlan) -> Result<SplitSummary> {
        std::fs::create_dir_all(&plan.out_dir).map_err(|e| {
            UploadError::Filesystem(format!(
                "cannot create output dir {}: {}",
                plan.out_dir.display(),
                e
            ))
        })?;

        let reader = Self::open_input(input)?;

        let mut shard_index: u32 = 1;
        let mut shard_lines: u64 = 0;
        let mut total_written: u64 = 0;
        let mut skipped: u64 = 0;
        let mut shards: Vec<PathBuf> = vec![plan.shard_path(shard_index)];
        let mut writer = Self::open_shard(&shards[0])?;

        for line in reader.lines() {
            let line = line.map_err(|e| {
                UploadError::Filesystem(format!("read error in {}: {}", input.display(), e))
            })?;

            if !is_statement_line(&line) {
                skipped += 1;
                continue;
            }

            writeln!(writer, "{}", line)
                .with_context(|| format!("write error in shard {:04}", shard_index))?;
            shard_lines += 1;
            total_written += 1;

            if let Some(limit) = plan.limit {
                if total_written >= limit {
                    break;
                }
            }

            if shard_lines >= plan.lines_per_shard {
                Self::finish_shard(writer, shard_index, shard_lines)?;
                shard_index += 1;
                shard_lines = 0;
                let next = plan.shard_path(shard_index);
                writer = Self::open_shard(&next)?;
                shards.push(next);
            }
        }

        // 最後のシャードは行数0でも確定させる（元の分割挙動に一致）
        Self::finish_shard(writer, shard_index, shard_lines)?;

        Ok(SplitSummary {
            shards,
            statements_written: total_written,
            lines_skipped: skipped,
        })
    }
}

impl Default for GzipShardSplitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShardSplitter for GzipShardSplitter {
    async fn split(&self, input: &Path, plan: &SplitPlan) -> Result<SplitSummary> {
        let input = input.to_path_buf();
        let plan = plan.clone();
        tokio::task::spawn_blocking(move || Self::split_internal(&input, &plan))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read_shard(path: &Path) -> Vec<String> {
        let file = File::open(path).unwrap();
        let reader = BufReader::new(GzDecoder::new(file));
        reader.lines().map(|l| l.unwrap()).collect()
    }

    fn statement(n: u32) -> String {
        format!("<http://example.com/{}> <http://example.com/p> \"v\" .", n)
    }

    #[tokio::test]
    async fn test_split_rolls_over_at_lines_per_shard() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("source.nt");
        let lines: Vec<String> = (1..=5).map(statement).collect();
        fs::write(&input, lines.join("\n")).unwrap();

        let plan = SplitPlan::new("imdb_shard_", temp.path(), 2, None);
        let summary = GzipShardSplitter::new().split(&input, &plan).await.unwrap();

        // 5文を2行ずつ: 2 + 2 + 1 で3シャード
        assert_eq!(summary.statements_written, 5);
        assert_eq!(summary.shards.len(), 3);
        assert_eq!(read_shard(&summary.shards[0]), vec![statement(1), statement(2)]);
        assert_eq!(read_shard(&summary.shards[1]), vec![statement(3), statement(4)]);
        assert_eq!(read_shard(&summary.shards[2]), vec![statement(5)]);
    }

    #[tokio::test]
    async fn test_split_skips_prefix_and_blank_lines() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("source.ttl");
        let content = format!(
            "@prefix ex: <http://example.com/> .\n\n{}\n\n{}\n",
            statement(1),
            statement(2)
        );
        fs::write(&input, content).unwrap();

        let plan = SplitPlan::new("imdb_shard_", temp.path(), 100, None);
        let summary = GzipShardSplitter::new().split(&input, &plan).await.unwrap();

        assert_eq!(summary.statements_written, 2);
        assert_eq!(summary.lines_skipped, 3);
        assert_eq!(read_shard(&summary.shards[0]), vec![statement(1), statement(2)]);
    }

    #[tokio::test]
    async fn test_split_respects_limit() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("source.nt");
        let lines: Vec<String> = (1..=10).map(statement).collect();
        fs::write(&input, lines.join("\n")).unwrap();

        let plan = SplitPlan::new("imdb_shard_", temp.path(), 100, Some(3));
        let summary = GzipShardSplitter::new().split(&input, &plan).await.unwrap();

        assert_eq!(summary.statements_written, 3);
        assert_eq!(summary.shards.len(), 1);
        assert_eq!(read_shard(&summary.shards[0]).len(), 3);
    }

    #[tokio::test]
    async fn test_split_reads_gzipped_input() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("source.nt.gz");
        let file = File::create(&input).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        writeln!(encoder, "{}", statement(1)).unwrap();
        writeln!(encoder, "{}", statement(2)).unwrap();
        encoder.finish().unwrap();

        let out_dir = temp.path().join("out");
        let plan = SplitPlan::new("imdb_shard_", &out_dir, 100, None);
        let summary = GzipShardSplitter::new().split(&input, &plan).await.unwrap();

        assert_eq!(summary.statements_written, 2);
        assert_eq!(read_shard(&summary.shards[0]), vec![statement(1), statement(2)]);
    }

    #[tokio::test]
    async fn test_split_missing_input_is_filesystem_error() {
        let temp = TempDir::new().unwrap();
        let plan = SplitPlan::new("imdb_shard_", temp.path(), 100, None);

        let err = GzipShardSplitter::new()
            .split(Path::new("/no/such/source.nt"), &plan)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<UploadError>(),
            Some(UploadError::Filesystem(_))
        ));
    }

    #[tokio::test]
    async fn test_shard_names_are_zero_padded() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("source.nt");
        fs::write(&input, statement(1)).unwrap();

        let plan = SplitPlan::new("imdb_shard_", temp.path(), 100, None);
        let summary = GzipShardSplitter::new().split(&input, &plan).await.unwrap();

        assert!(summary.shards[0].ends_with("imdb_shard_0001.nt.gz"));
    }
}
